use ash::vk;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("host allocation of {size} bytes failed")]
    OutOfHostMemory { size: u64 },

    #[error("handle counter exhausted")]
    HandlesExhausted,

    #[error("layer {0:?} passed to a driver-level enumeration")]
    LayerNotPresent(String),

    #[error("format {0:?} is not supported")]
    FormatNotSupported(vk::Format),

    #[error("loader interface version {requested} is not supported (minimum {minimum})")]
    IncompatibleDriver { requested: u32, minimum: u32 },

    #[error("device {0:?} already owns its queue")]
    QueueAlreadyCreated(vk::Device),

    #[error("private data slot {0:#x} does not exist")]
    UnknownPrivateDataSlot(u64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// The result code an entry point hands back to the loader.
    pub fn to_vk_result(&self) -> vk::Result {
        match self {
            DriverError::OutOfHostMemory { .. }
            | DriverError::HandlesExhausted
            | DriverError::UnknownPrivateDataSlot(_) => {
                vk::Result::ERROR_OUT_OF_HOST_MEMORY
            }
            DriverError::LayerNotPresent(_) => vk::Result::ERROR_LAYER_NOT_PRESENT,
            DriverError::FormatNotSupported(_) => vk::Result::ERROR_FORMAT_NOT_SUPPORTED,
            DriverError::IncompatibleDriver { .. } => vk::Result::ERROR_INCOMPATIBLE_DRIVER,
            DriverError::QueueAlreadyCreated(_)
            | DriverError::Config(_)
            | DriverError::Io(_) => vk::Result::ERROR_INITIALIZATION_FAILED,
        }
    }
}

impl From<DriverError> for vk::Result {
    fn from(err: DriverError) -> Self {
        err.to_vk_result()
    }
}
