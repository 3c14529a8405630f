pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

pub type Box<T> = alloc::boxed::Box<T>;

pub type Vec<T> = alloc::vec::Vec<T>;

pub type String = alloc::string::String;

pub use alloc::format;
