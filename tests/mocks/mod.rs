pub mod mock_markup;

pub use mock_markup::MockMarkup;
