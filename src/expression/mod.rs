pub(crate) mod ast;
pub(crate) mod decode;
pub(crate) mod number;
pub(crate) mod render;
