pub(crate) mod backend;
pub(crate) mod calendar;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod grid;
pub(crate) mod page;
pub(crate) mod plan;
pub(crate) mod text;
pub(crate) mod wallpaper;
