use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Protobuf parse error: {0}")]
    ProtobufParse(String),

    #[error("No .proto files given")]
    NoInputFiles,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
