//! Values shown on the panel
//!
//! These are filled in by the application from the LoRaWAN stack; the
//! renderer only reads them.

/// How the device joined the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activation {
    /// Over-the-air activation (join request / accept)
    OverTheAir,
    /// Activation by personalisation (pre-provisioned session keys)
    Personalisation,
}

impl Activation {
    pub fn from_otaa(otaa: bool) -> Self {
        if otaa {
            Activation::OverTheAir
        } else {
            Activation::Personalisation
        }
    }

    pub fn is_otaa(&self) -> bool {
        matches!(self, Activation::OverTheAir)
    }
}

/// Board LEDs mirrored on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// LED1, blinks on transmit
    Tx,
    /// LED2, blinks on receive
    Rx,
    /// LED3, driven by the application
    App,
}

impl Led {
    /// Parse the board's 1-based LED number
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Led::Tx),
            2 => Some(Led::Rx),
            3 => Some(Led::App),
            _ => None,
        }
    }

    /// Board LED number
    pub fn id(self) -> u8 {
        match self {
            Led::Tx => 1,
            Led::Rx => 2,
            Led::App => 3,
        }
    }
}

/// Outcome of the last uplink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UplinkStatus<'a> {
    /// Confirmed frame was acknowledged by the network
    pub acked: bool,
    /// Datarate index (DR0, DR1, ...)
    pub datarate: u8,
    /// Uplink frame counter
    pub counter: u32,
    /// Application port
    pub port: u8,
    /// Application payload (first 64 bytes are shown)
    pub data: &'a [u8],
}

/// Last downlink reception
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DownlinkStatus<'a> {
    /// The downlink carried application data
    pub rx_data: bool,
    /// Received signal strength in dBm
    pub rssi: i16,
    /// Signal to noise ratio in dB
    pub snr: i8,
    /// Downlink frame counter
    pub counter: u32,
    /// Application port, meaningful only when `rx_data` is set
    pub port: u8,
    /// Application payload, meaningful only when `rx_data` is set
    pub data: &'a [u8],
}
