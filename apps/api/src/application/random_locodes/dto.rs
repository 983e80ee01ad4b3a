/// Locodes picked by a random draw, in draw order.
#[derive(Debug, Clone)]
pub struct RandomSample {
    pub codes: Vec<String>,
}

impl RandomSample {
    /// One code per line, each line newline-terminated.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.codes.iter().map(|c| c.len() + 1).sum());
        for code in &self.codes {
            out.push_str(code);
            out.push('\n');
        }
        out
    }
}
