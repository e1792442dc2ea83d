//! Render Configuration

/// Serializer configuration options
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Size of the write buffer placed in front of the sink (bytes).
    /// Zero writes straight through.
    pub buffer_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 1024, // 1KB
        }
    }
}
