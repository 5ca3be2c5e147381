pub(crate) mod day;
pub(crate) mod goal;
pub(crate) mod year;
