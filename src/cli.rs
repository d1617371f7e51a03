mod args;

pub use args::Options;
