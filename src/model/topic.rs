use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Literal(String),
    Placeholder(String),
}

/// Output topic pattern with `${name}` style placeholders
///
/// Compiled once, rendered per publish. Placeholder names match
/// case-insensitively; placeholders without a value render as nothing. A
/// `${` without a closing brace is kept as literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicTemplate {
    tokens: Vec<Token>,
}

impl TopicTemplate {
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let mut tokens = vec![];
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start + 2..].find('}') else {
                break;
            };
            literal.push_str(&rest[..start]);
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Placeholder(
                rest[start + 2..start + 2 + len].to_string(),
            ));
            rest = &rest[start + 3 + len..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self { tokens }
    }

    #[must_use]
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Literal(text) => text.as_str(),
                Token::Placeholder(name) => vars
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map_or("", |(_, value)| *value),
            })
            .collect()
    }
}

impl Display for TopicTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(text) => f.write_str(text)?,
                Token::Placeholder(name) => write!(f, "${{{name}}}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::topic::TopicTemplate;

    const VARS: &[(&str, &str)] = &[
        ("name", "Kitchen"),
        ("ieeeAddr", "0x0017880100000001"),
        ("index", "3"),
    ];

    #[test]
    fn literal_only() {
        let tmpl = TopicTemplate::compile("zigbee/lights");
        assert_eq!(tmpl.render(VARS), "zigbee/lights");
    }

    #[test]
    fn placeholders() {
        let tmpl = TopicTemplate::compile("zigbee/${name}/${index}");
        assert_eq!(tmpl.render(VARS), "zigbee/Kitchen/3");

        let tmpl = TopicTemplate::compile("${ieeeAddr}");
        assert_eq!(tmpl.render(VARS), "0x0017880100000001");
    }

    #[test]
    fn case_insensitive() {
        let tmpl = TopicTemplate::compile("hue/${NAME}-${ieeeaddr}");
        assert_eq!(tmpl.render(VARS), "hue/Kitchen-0x0017880100000001");
    }

    #[test]
    fn unknown_placeholder_is_empty() {
        let tmpl = TopicTemplate::compile("hue/${room}/${name}");
        assert_eq!(tmpl.render(VARS), "hue//Kitchen");
    }

    #[test]
    fn unterminated_is_literal() {
        let tmpl = TopicTemplate::compile("hue/${name}/${index");
        assert_eq!(tmpl.render(VARS), "hue/Kitchen/${index");
    }

    #[test]
    fn display_roundtrip() {
        let pattern = "zigbee/${name}/state";
        assert_eq!(TopicTemplate::compile(pattern).to_string(), pattern);
    }
}
