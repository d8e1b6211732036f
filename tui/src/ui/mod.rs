mod draw;
mod layout;
mod theme;
mod widgets;

pub use draw::draw;
