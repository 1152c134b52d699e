use embedded_hal::digital;
use mockall::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinError;

impl digital::Error for PinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

mock! {
    #[derive(Debug)]
    pub OutputPin {}

    impl digital::OutputPin for OutputPin {
        fn set_low(&mut self) -> Result<(), PinError>;
        fn set_high(&mut self) -> Result<(), PinError>;
    }

    impl digital::ErrorType for OutputPin {
        type Error = PinError;
    }
}
