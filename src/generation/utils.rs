//! Identifier transformation utilities for generated code

/// Converts a string to snake_case.
///
/// # Examples
/// ```
/// use componentgen::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("sampleRate"), "sample_rate");
/// assert_eq!(to_snake_case("Frequency Offset"), "frequency_offset");
/// assert_eq!(to_snake_case("data-float-in"), "data_float_in");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if !result.is_empty() && !result.ends_with('_') {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to lowerCamelCase.
///
/// # Examples
/// ```
/// use componentgen::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("sample_rate"), "sampleRate");
/// assert_eq!(to_camel_case("Frequency Offset"), "frequencyOffset");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut words = to_snake_case(s)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter();

    let mut result = words.next().unwrap_or_default();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Replaces characters that are not valid in identifiers with underscores
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if result.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Sanitizes a Python identifier, appending an underscore to keywords
pub fn sanitize_python_identifier(s: &str) -> String {
    let ident = sanitize_identifier(&to_snake_case(s));
    match ident.as_str() {
        "and" | "as" | "assert" | "async" | "await" | "break" | "class" | "continue" | "def"
        | "del" | "elif" | "else" | "except" | "exec" | "finally" | "for" | "from" | "global"
        | "if" | "import" | "in" | "is" | "lambda" | "nonlocal" | "not" | "or" | "pass"
        | "print" | "raise" | "return" | "try" | "while" | "with" | "yield" | "None"
        | "True" | "False" => format!("{ident}_"),
        _ => ident,
    }
}

/// Sanitizes a Java field identifier, appending an underscore to keywords
pub fn sanitize_java_identifier(s: &str) -> String {
    let ident = sanitize_identifier(&to_camel_case(s));
    match ident.as_str() {
        "abstract" | "assert" | "boolean" | "break" | "byte" | "case" | "catch" | "char"
        | "class" | "const" | "continue" | "default" | "do" | "double" | "else" | "enum"
        | "extends" | "final" | "finally" | "float" | "for" | "goto" | "if" | "implements"
        | "import" | "instanceof" | "int" | "interface" | "long" | "native" | "new"
        | "package" | "private" | "protected" | "public" | "return" | "short" | "static"
        | "strictfp" | "super" | "switch" | "synchronized" | "this" | "throw" | "throws"
        | "transient" | "try" | "void" | "volatile" | "while" | "true" | "false" | "null" => {
            format!("{ident}_")
        }
        _ => ident,
    }
}

/// Qualify a class name with a dotted package, if any
pub fn qualified_name(name: &str, package: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}

/// Directory path of a dotted package
pub fn package_path(package: &str) -> String {
    package.replace('.', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("sampleRate"), "sample_rate");
        assert_eq!(to_snake_case("SampleRate"), "sample_rate");
        assert_eq!(to_snake_case("sample-rate"), "sample_rate");
        assert_eq!(to_snake_case("sample rate "), "sample_rate");
        assert_eq!(to_snake_case("dataFloat_in"), "data_float_in");
        assert_eq!(to_snake_case("gain2Db"), "gain2_db");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("sample_rate"), "sampleRate");
        assert_eq!(to_camel_case("SampleRate"), "sampleRate");
        assert_eq!(to_camel_case("center frequency"), "centerFrequency");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("DCE:1234-5678"), "DCE_1234_5678");
        assert_eq!(sanitize_identifier("2fast"), "_2fast");
        assert_eq!(sanitize_identifier(""), "_");
    }

    #[test]
    fn test_sanitize_keywords() {
        assert_eq!(sanitize_python_identifier("lambda"), "lambda_");
        assert_eq!(sanitize_python_identifier("frequencyOffset"), "frequency_offset");
        assert_eq!(sanitize_java_identifier("class"), "class_");
        assert_eq!(sanitize_java_identifier("frequency_offset"), "frequencyOffset");
    }

    #[test]
    fn test_qualified_name_and_package_path() {
        assert_eq!(qualified_name("Echo", "org.demo.echo"), "org.demo.echo.Echo");
        assert_eq!(qualified_name("Echo", ""), "Echo");
        assert_eq!(package_path("org.demo.echo"), "org/demo/echo");
    }
}
