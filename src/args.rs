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

    /// Get next argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    fn unknown_flag(&self, flag: &str) -> Box<dyn Error> {
        format!("Unknown flag for {}: {}", self.command_name, flag).into()
    }

    /// Fail on any leftover argument
    pub fn finish(mut self) -> Result<(), Box<dyn Error>> {
        match self.iter.next() {
            Some(arg) if arg.starts_with('-') => Err(self.unknown_flag(&arg)),
            Some(arg) => Err(format!(
                "Unexpected argument for {}: {}",
                self.command_name, arg
            )
            .into()),
            None => Ok(()),
        }
    }
}

/// `zk new <title...> [--template <name>]`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NewArgs {
    pub title: String,
    pub template: Option<String>,
}

impl NewArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Box<dyn Error>> {
        let mut parser = ArgParser::new(args, "new");
        let mut words: Vec<String> = Vec::new();
        let mut template = None;
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "--template" | "-T" => {
                    template = Some(parser.extract_value("--template")?)
                }
                other => {
                    if let Some(v) = other.strip_prefix("--template=") {
                        template = Some(v.to_string());
                    } else if other.starts_with('-') && other.len() > 1 {
                        return Err(parser.unknown_flag(other));
                    } else {
                        words.push(other.to_string());
                    }
                }
            }
        }
        if words.is_empty() {
            return Err("Usage: zk new <title> [--template <name>]".into());
        }
        Ok(Self { title: words.join(" "), template })
    }
}

/// `zk config [--force]`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    pub force: bool,
}

impl ConfigArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Box<dyn Error>> {
        let mut parser = ArgParser::new(args, "config");
        let mut flags = Self::default();
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "--force" | "-f" => flags.force = true,
                other => return Err(parser.unknown_flag(other)),
            }
        }
        Ok(flags)
    }
}
