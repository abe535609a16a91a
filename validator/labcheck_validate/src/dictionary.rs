// Pre-normalized registry dictionaries, built once per category.

use labcheck_registry::{keywords_for, parameters_for, result_words, Category};
use lazy_static::lazy_static;

use crate::normalize::{compact, normalize_text, term_ends};

/// One dictionary term in both comparable forms.
#[derive(Debug, Clone)]
pub struct CompiledTerm {
    spaced: String,
    compact: String,
}

impl CompiledTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            spaced: normalize_text(raw),
            compact: compact(raw),
        }
    }

    /// Found in normalized document text, either as written or, for
    /// multi-word terms, with its inner spaces dropped (`specificgravity`).
    pub fn found_in(&self, normalized_text: &str) -> bool {
        self.ends_in(normalized_text).next().is_some()
    }

    /// Found with a result value among the next `window` tokens.
    pub fn reported_in(&self, normalized_text: &str, window: usize) -> bool {
        self.ends_in(normalized_text)
            .any(|end| value_follows(normalized_text, end, window))
    }

    fn ends_in<'t>(&'t self, normalized_text: &'t str) -> impl Iterator<Item = usize> + 't {
        let compact = self.spaced.contains(' ').then_some(self.compact.as_str());
        term_ends(normalized_text, &self.spaced).chain(
            compact
                .into_iter()
                .flat_map(move |c| term_ends(normalized_text, c)),
        )
    }

    /// Equal to an already compacted field name.
    pub fn matches_key(&self, compact_key: &str) -> bool {
        self.compact == compact_key
    }
}

#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    pub keyword: &'static str,
    pub term: CompiledTerm,
}

#[derive(Debug, Clone)]
pub struct CompiledParameter {
    pub canonical: &'static str,
    pub names: Vec<CompiledTerm>,
}

impl CompiledParameter {
    pub fn found_in(&self, normalized_text: &str) -> bool {
        self.names.iter().any(|n| n.found_in(normalized_text))
    }

    pub fn reported_in(&self, normalized_text: &str, window: usize) -> bool {
        self.names
            .iter()
            .any(|n| n.reported_in(normalized_text, window))
    }

    pub fn matches_key(&self, compact_key: &str) -> bool {
        self.names.iter().any(|n| n.matches_key(compact_key))
    }
}

/// A number, or a word reports print instead of one.
pub fn is_value_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) || result_words().contains(&token)
}

fn value_follows(normalized_text: &str, end: usize, window: usize) -> bool {
    normalized_text[end..]
        .split(' ')
        .filter(|t| !t.is_empty())
        .take(window)
        .any(is_value_token)
}

#[derive(Debug, Clone)]
pub struct CompiledDictionary {
    pub category: Category,
    pub keywords: Vec<CompiledKeyword>,
    pub parameters: Vec<CompiledParameter>,
}

impl CompiledDictionary {
    fn build(category: Category) -> Self {
        let keywords = keywords_for(category)
            .iter()
            .map(|&keyword| CompiledKeyword {
                keyword,
                term: CompiledTerm::new(keyword),
            })
            .collect();
        let parameters = parameters_for(category)
            .iter()
            .map(|p| CompiledParameter {
                canonical: p.canonical,
                names: p.names().map(CompiledTerm::new).collect(),
            })
            .collect();
        Self {
            category,
            keywords,
            parameters,
        }
    }
}

lazy_static! {
    static ref CBC: CompiledDictionary = CompiledDictionary::build(Category::Cbc);
    static ref URINALYSIS: CompiledDictionary = CompiledDictionary::build(Category::Urinalysis);
    static ref LIPID: CompiledDictionary = CompiledDictionary::build(Category::Lipid);
}

/// The compiled dictionary for `category`.
pub fn compiled(category: Category) -> &'static CompiledDictionary {
    match category {
        Category::Cbc => &*CBC,
        Category::Urinalysis => &*URINALYSIS,
        Category::Lipid => &*LIPID,
    }
}
