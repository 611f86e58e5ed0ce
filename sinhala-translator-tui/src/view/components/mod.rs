//! 界面组件

pub mod section;
pub mod statusbar;
