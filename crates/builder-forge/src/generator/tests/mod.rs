pub(crate) mod support;

mod descriptor;
