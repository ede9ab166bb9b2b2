//! User-facing notification texts

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn welcome() -> Self {
        Self {
            title: "Yo, welcome!",
            message: "We started you off with some mappings. Type in 'yo newdoc' into the URL bar!"
                .to_string(),
        }
    }

    pub fn guessed(input: &str, keyword: &str) -> Self {
        Self {
            title: "Yo! We guessed!",
            message: format!("We guessed '{input}' matches to '{keyword}'!"),
        }
    }

    pub fn mapped(keyword: &str, url: &str) -> Self {
        Self {
            title: "Yo, you wanted a new mapping?",
            message: format!("We mapped '{keyword}' to '{url}'!"),
        }
    }

    pub fn cleared() -> Self {
        Self {
            title: "Yo, cleared!",
            message: "We cleared all the mappings.".to_string(),
        }
    }

    pub fn not_found(text: &str) -> Self {
        Self {
            title: "Yo, not found!",
            message: format!(
                "We couldn't find '{text}' as a mapping. Type 'yo set {text} <target>' to define a new mapping!"
            ),
        }
    }
}
