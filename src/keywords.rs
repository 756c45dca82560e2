//! Normalización de palabras clave entre texto libre y tokens ordenados.

/// Divide texto libre en tokens sobre rachas de comas o espacios en blanco.
///
/// Conserva el orden de escritura y los duplicados; solo descarta los tokens
/// vacíos que dejan los separadores consecutivos.
pub fn split(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Representación de despliegue y de almacenamiento en el diccionario Info.
pub fn join(tokens: &[String]) -> String {
    tokens.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_whitespace_runs() {
        assert_eq!(split("alpha, beta  gamma"), ["alpha", "beta", "gamma"]);
        assert_eq!(split(",, alpha ,,,   beta,"), ["alpha", "beta"]);
        assert_eq!(split("uno\tdos\ntres"), ["uno", "dos", "tres"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(split("beta alpha beta"), ["beta", "alpha", "beta"]);
    }

    #[test]
    fn empty_and_separator_only_input_yield_no_tokens() {
        assert!(split("").is_empty());
        assert!(split("  , ,\t").is_empty());
    }

    #[test]
    fn normalization_is_a_fixed_point() {
        for text in ["alpha, beta  gamma", "a,b,c", "  x  ", "uno,, dos tres,cuatro"] {
            let once = split(text);
            let twice = split(&join(&once));
            assert_eq!(twice, once, "entrada: {text:?}");
        }
    }
}
