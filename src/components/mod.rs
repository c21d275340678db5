pub mod item_list;
pub mod search_bar;
