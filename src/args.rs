use std::error::Error;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(
        &mut self,
        flag: &str,
    ) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name)
                .into()
        })
    }

    /// Next argument parsed as a one-based item number
    pub fn extract_position(&mut self) -> Result<usize, Box<dyn Error>> {
        match self.iter.next() {
            Some(raw) => parse_position(&raw),
            None => Err(format!(
                "Provide an item number for {}",
                self.command_name
            )
            .into()),
        }
    }

    /// Check if there are remaining arguments
    pub fn has_more(&self) -> bool {
        self.iter.len() > 0
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    /// Collect remaining args
    pub fn collect_remaining(self) -> Vec<String> {
        self.iter.collect()
    }
}

/// Turn a one-based item number from the command line into a list index.
pub fn parse_position(raw: &str) -> Result<usize, Box<dyn Error>> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!(
            "Invalid item number: {raw} (use the numbers shown by `todo list`)"
        )
        .into()),
        Ok(n) => Ok(n - 1),
    }
}
