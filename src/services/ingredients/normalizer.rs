/// Accented vowels folded to their plain form. Input is lower-cased first,
/// the upper-case forms are kept so the table can be used on its own.
pub const ACCENTED_VOWELS: [(char, char); 10] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('Á', 'a'),
    ('É', 'e'),
    ('Í', 'i'),
    ('Ó', 'o'),
    ('Ú', 'u'),
];

/// Punctuation replaced by a space before tokenizing
pub const PUNCTUATION: [char; 10] = ['.', ',', ';', ':', '!', '?', '(', ')', '[', ']'];

/// Tokens dropped from an ingredient phrase: articles, prepositions,
/// units and cut-of-meat qualifiers
pub const STOPWORDS: &[&str] = &[
    "de", "la", "el", "un", "una", "unos", "unas",
    "para", "en", "con", "sin", "por", "a",
    "gr", "gramos", "g", "kg", "kilos", "kilogramos",
    "ml", "mililitros", "l", "litros", "lt",
    "cucharadas", "cucharaditas", "tazas", "taza",
    "piezas", "pieza", "unidades", "unidad",
    "filete", "filetes", "bistec", "bistecs",
    "pechuga", "pechugas", "trutro", "trutros",
    "muslo", "muslos", "pierna", "piernas",
    "lomo", "lomos", "costilla", "costillas", "chuleta", "chuletas",
];

/// Anything that may carry an ingredient phrase.
///
/// Values without text (a JSON number, `None`, ...) return `None` and
/// normalize to the empty string, so they never match anything.
pub trait IngredientText {
    fn as_text(&self) -> Option<&str>;
}

impl IngredientText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl IngredientText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: IngredientText + ?Sized> IngredientText for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: IngredientText> IngredientText for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|text| text.as_text())
    }
}

impl IngredientText for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Returns true if the token is removed during normalization
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Word separator; the byte order mark counts as whitespace
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn fold_accent(c: char) -> char {
    ACCENTED_VOWELS
        .iter()
        .find(|(accented, _)| *accented == c)
        .map(|(_, plain)| *plain)
        .unwrap_or(c)
}

/// Canonical form of an ingredient phrase.
///
/// Lower-cases, folds accented vowels, turns digit runs and punctuation into
/// word breaks, drops stopwords and joins the remaining tokens with single
/// spaces. `"500 gramos de cerdo"` becomes `"cerdo"`.
///
/// Blank or non-text input yields an empty string. The result is stable
/// under a second pass.
pub fn normalize<T: IngredientText + ?Sized>(phrase: &T) -> String {
    let text = match phrase.as_text() {
        Some(text) if !text.trim_matches(is_separator).is_empty() => text,
        _ => return String::new(),
    };

    let mut cleaned = String::with_capacity(text.len());
    let mut in_digits = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                cleaned.push(' ');
            }
            in_digits = true;
            continue;
        }
        in_digits = false;

        if PUNCTUATION.contains(&c) || is_separator(c) {
            cleaned.push(' ');
        } else {
            cleaned.push(fold_accent(c));
        }
    }

    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .collect::<Vec<_>>()
        .join(" ")
}
