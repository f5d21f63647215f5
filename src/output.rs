use std::io::{self, Write};

pub const LABEL: &str = "Your JWT Secret:";
pub const REMINDER: &str = "Make sure to keep this secret secure and don't share it publicly!";

pub fn write_secret<W: Write>(out: &mut W, secret: &str) -> io::Result<()> {
    writeln!(out, "{LABEL}")?;
    writeln!(out, "{secret}")?;
    writeln!(out)?;
    writeln!(out, "{REMINDER}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_layout() {
        let mut buf = Vec::new();
        write_secret(&mut buf, "00ff").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Your JWT Secret:\n00ff\n\nMake sure to keep this secret secure and don't share it publicly!\n"
        );
    }
}
