pub mod descriptor_loader;

pub(crate) use descriptor_loader::DescriptorLoader;
