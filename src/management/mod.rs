mod items;

pub use items::ItemManager;
pub use items::ItemStore;
pub use items::SharedItemStore;
