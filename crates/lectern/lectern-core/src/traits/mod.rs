mod store;
mod token_counter;

pub use store::{IContentStore, INoteStore, INotebookStore, ISourceStore};
pub use token_counter::ITokenCounter;
