#[derive(Debug, Clone, Copy)]
pub struct Bgra([u8; 4]);

impl Bgra {
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([blue, green, red, alpha])
    }

    pub const fn b(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn r(&self) -> u8 {
        self.0[2]
    }

    pub const fn a(&self) -> u8 {
        self.0[3]
    }
}

impl AsRef<[u8]> for Bgra {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Bgra,
    pub ink: Bgra,
}

impl Theme {
    pub fn default() -> Self {
        Self {
            background: Bgra::from_rgba(255, 255, 255, 255),
            ink: Bgra::from_rgba(0, 0, 0, 255),
        }
    }
}
