//! Piezo note table in Hz (equal temperament, A4 = 440 Hz). `S` marks a sharp.

pub const REST: u16 = 0;

pub const NOTE_B0: u16 = 31;

pub const NOTE_C1: u16 = 33;
pub const NOTE_CS1: u16 = 35;
pub const NOTE_D1: u16 = 37;
pub const NOTE_DS1: u16 = 39;
pub const NOTE_E1: u16 = 41;
pub const NOTE_F1: u16 = 44;
pub const NOTE_FS1: u16 = 46;
pub const NOTE_G1: u16 = 49;
pub const NOTE_GS1: u16 = 52;
pub const NOTE_A1: u16 = 55;
pub const NOTE_AS1: u16 = 58;
pub const NOTE_B1: u16 = 62;

pub const NOTE_C2: u16 = 65;
pub const NOTE_CS2: u16 = 69;
pub const NOTE_D2: u16 = 73;
pub const NOTE_DS2: u16 = 78;
pub const NOTE_E2: u16 = 82;
pub const NOTE_F2: u16 = 87;
pub const NOTE_FS2: u16 = 93;
pub const NOTE_G2: u16 = 98;
pub const NOTE_GS2: u16 = 104;
pub const NOTE_A2: u16 = 110;
pub const NOTE_AS2: u16 = 117;
pub const NOTE_B2: u16 = 123;

pub const NOTE_C3: u16 = 131;
pub const NOTE_CS3: u16 = 139;
pub const NOTE_D3: u16 = 147;
pub const NOTE_DS3: u16 = 156;
pub const NOTE_E3: u16 = 165;
pub const NOTE_F3: u16 = 175;
pub const NOTE_FS3: u16 = 185;
pub const NOTE_G3: u16 = 196;
pub const NOTE_GS3: u16 = 208;
pub const NOTE_A3: u16 = 220;
pub const NOTE_AS3: u16 = 233;
pub const NOTE_B3: u16 = 247;

pub const NOTE_C4: u16 = 262;
pub const NOTE_CS4: u16 = 277;
pub const NOTE_D4: u16 = 294;
pub const NOTE_DS4: u16 = 311;
pub const NOTE_E4: u16 = 330;
pub const NOTE_F4: u16 = 349;
pub const NOTE_FS4: u16 = 370;
pub const NOTE_G4: u16 = 392;
pub const NOTE_GS4: u16 = 415;
pub const NOTE_A4: u16 = 440;
pub const NOTE_AS4: u16 = 466;
pub const NOTE_B4: u16 = 494;

pub const NOTE_C5: u16 = 523;
pub const NOTE_CS5: u16 = 554;
pub const NOTE_D5: u16 = 587;
pub const NOTE_DS5: u16 = 622;
pub const NOTE_E5: u16 = 659;
pub const NOTE_F5: u16 = 698;
pub const NOTE_FS5: u16 = 740;
pub const NOTE_G5: u16 = 784;
pub const NOTE_GS5: u16 = 831;
pub const NOTE_A5: u16 = 880;
pub const NOTE_AS5: u16 = 932;
pub const NOTE_B5: u16 = 988;

pub const NOTE_C6: u16 = 1047;
pub const NOTE_CS6: u16 = 1109;
pub const NOTE_D6: u16 = 1175;
pub const NOTE_DS6: u16 = 1245;
pub const NOTE_E6: u16 = 1319;
pub const NOTE_F6: u16 = 1397;
pub const NOTE_FS6: u16 = 1480;
pub const NOTE_G6: u16 = 1568;
pub const NOTE_GS6: u16 = 1661;
pub const NOTE_A6: u16 = 1760;
pub const NOTE_AS6: u16 = 1865;
pub const NOTE_B6: u16 = 1976;

pub const NOTE_C7: u16 = 2093;
pub const NOTE_CS7: u16 = 2217;
pub const NOTE_D7: u16 = 2349;
pub const NOTE_DS7: u16 = 2489;
pub const NOTE_E7: u16 = 2637;
pub const NOTE_F7: u16 = 2794;
pub const NOTE_FS7: u16 = 2960;
pub const NOTE_G7: u16 = 3136;
pub const NOTE_GS7: u16 = 3322;
pub const NOTE_A7: u16 = 3520;
pub const NOTE_AS7: u16 = 3729;
pub const NOTE_B7: u16 = 3951;

pub const NOTE_C8: u16 = 4186;
pub const NOTE_CS8: u16 = 4435;
pub const NOTE_D8: u16 = 4699;
pub const NOTE_DS8: u16 = 4978;
