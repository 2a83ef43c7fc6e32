use std::{
    fmt::{Display, Write as _},
    io::{self, Write},
};

/// Text layout of rendered subsets.
#[derive(Debug, Clone)]
pub struct Config {
    pub open: String,
    pub close: String,
    /// Between the elements of one subset.
    pub separator: String,
    /// Between two subsets.
    pub delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open: "{".to_string(),
            close: "}".to_string(),
            separator: ", ".to_string(),
            delimiter: ",\n".to_string(),
        }
    }
}

pub fn render<E: Display>(subset: &[&E], config: &Config) -> String {
    let mut res = config.open.clone();
    for (i, e) in subset.iter().enumerate() {
        if i > 0 {
            res.push_str(&config.separator);
        }
        // writing into a String cannot fail
        let _ = write!(res, "{e}");
    }
    res.push_str(&config.close);
    res
}

/// Streams rendered subsets into `W`, delimiter-separated.
pub struct SubsetWriter<W: Write> {
    out: W,
    config: Config,
    written: u128,
}

impl<W: Write> SubsetWriter<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            written: 0,
        }
    }

    pub fn write_subset<E: Display>(&mut self, subset: &[&E]) -> io::Result<()> {
        if self.written > 0 {
            self.out.write_all(self.config.delimiter.as_bytes())?;
        }
        self.out.write_all(render(subset, &self.config).as_bytes())?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u128 {
        self.written
    }

    /// Terminates the last line and flushes.
    pub fn finish(mut self) -> io::Result<W> {
        if self.written > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_and_commas() {
        let cfg = Config::default();
        assert_eq!(render::<i32>(&[], &cfg), "{}");
        assert_eq!(render(&[&1], &cfg), "{1}");
        assert_eq!(render(&[&"a", &"b", &"c"], &cfg), "{a, b, c}");
    }

    #[test]
    fn custom_layout() {
        let cfg = Config {
            open: "[".to_string(),
            close: "]".to_string(),
            separator: " ".to_string(),
            delimiter: "\n".to_string(),
        };
        assert_eq!(render(&[&1, &2], &cfg), "[1 2]");
    }

    #[test]
    fn delimiter_only_between_subsets() {
        let mut w = SubsetWriter::new(Vec::<u8>::new(), Config::default());
        w.write_subset::<i32>(&[]).unwrap();
        w.write_subset(&[&1]).unwrap();
        w.write_subset(&[&1, &2]).unwrap();
        assert_eq!(w.written(), 3);
        let out = w.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{},\n{1},\n{1, 2}\n");
    }

    #[test]
    fn nothing_written() {
        let w = SubsetWriter::new(Vec::<u8>::new(), Config::default());
        assert!(w.finish().unwrap().is_empty());
    }
}
