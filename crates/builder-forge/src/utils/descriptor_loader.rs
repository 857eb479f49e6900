use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::descriptor::DescriptorSet;

/// Memory-mapped descriptor file, parsed on demand.
pub struct DescriptorLoader {
  file: AsyncMmapFile,
}

impl DescriptorLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<DescriptorSet> {
    Ok(DescriptorSet::from_json(self.file.as_slice())?)
  }
}
