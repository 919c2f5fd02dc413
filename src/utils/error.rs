pub struct Error;

impl Error {
    pub fn invalid_input<T: AsRef<str>>(message: T) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, message.as_ref())
    }

    pub fn std_io<T: AsRef<str>>(message: T) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, message.as_ref())
    }
}
