pub mod core;

pub use self::core::{
    Content, FALLBACK_REPLY, GenerateError, GenerateRequest, Part, extract_reply, generate,
    generate_once,
};
