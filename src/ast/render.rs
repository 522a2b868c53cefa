use std::fmt::{self, Display, Write};

use super::ast::Ast;

impl Ast {
    /// Draws the tree one node per line.
    ///
    /// ```text
    /// (+)
    ///  ├(2)
    ///  └(*)
    ///    ├(3)
    ///    └(4)
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn render_into(&self, output: &mut impl Write, padding: &mut String) -> fmt::Result {
        writeln!(output, "({})", self.value())?;

        if let Some((left, right)) = self.children() {
            write!(output, "{} ├", padding)?;
            padding.push_str(" │");
            left.render_into(output, padding)?;
            padding.truncate(padding.len() - " │".len());

            write!(output, "{} └", padding)?;
            padding.push_str("  ");
            right.render_into(output, padding)?;
            padding.truncate(padding.len() - "  ".len());
        }

        Ok(())
    }

    /// Infix text with every operator application wrapped in parentheses.
    pub fn to_infix(&self) -> String {
        match self.children() {
            Some((left, right)) => format!(
                "( {} {} {} )",
                left.to_infix(),
                self.value(),
                right.to_infix()
            ),
            None => self.value().to_string(),
        }
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, &mut String::new())
    }
}
