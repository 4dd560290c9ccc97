use anyhow::Result;

/// Stand-in for platforms without a middle-click selection buffer.
///
/// Reads return an empty string and writes are silent no-ops, matching
/// the "nothing present" convention of the clipboard ports.
pub struct SelectionBuffer;

impl SelectionBuffer {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn supported(&self) -> bool {
        false
    }

    pub fn text(&self) -> Result<String> {
        Ok(String::new())
    }

    pub fn set_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}
