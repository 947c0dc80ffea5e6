// Services module for scaffolding operations

pub mod directory_preparer;
pub mod input_collector;
pub mod prompt;
pub mod scaffold;
pub mod template_fetcher;
