use embedded_hal::spi;
use mockall::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiError;

impl spi::Error for SpiError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

mock! {
    #[derive(Debug)]
    pub SpiBus<Word: Copy + 'static = u8> {}

    impl<Word: Copy + 'static> spi::SpiBus<Word> for SpiBus<Word> {
        fn read(&mut self, words: &mut [Word]) -> Result<(), SpiError>;
        fn write(&mut self, words: &[Word]) -> Result<(), SpiError>;
        fn transfer(&mut self, read: &mut [Word], write: &[Word]) -> Result<(), SpiError>;
        fn transfer_in_place(&mut self, words: &mut [Word]) -> Result<(), SpiError>;
        fn flush(&mut self) -> Result<(), SpiError>;
    }

    impl<Word: Copy + 'static> spi::ErrorType for SpiBus<Word> {
        type Error = SpiError;
    }
}
