use std::path::Path;

/// Prefix for every derived identifier, keeps generated symbols
/// greppable and avoids leading digits.
pub const IDENT_PREFIX: &str = "wav_";

/// Derives a C identifier from an input path: directories and the
/// extension are stripped, everything outside `[A-Za-z0-9_]` becomes
/// an underscore. Two inputs with the same stem collide, that's up to
/// the caller.
pub fn sanitize_identifier<P: AsRef<Path>>(path: P) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut ident = String::with_capacity(IDENT_PREFIX.len() + stem.len());
    ident.push_str(IDENT_PREFIX);
    for c in stem.chars() {
        ident.push(if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        });
    }
    ident
}

#[cfg(test)]
mod test {
    use crate::ident::sanitize_identifier;

    #[test]
    pub fn replaces_invalid_chars() {
        assert_eq!(
            sanitize_identifier("My Song (2024).wav"),
            "wav_My_Song__2024_"
        );
    }

    #[test]
    pub fn strips_directories_and_extension() {
        assert_eq!(sanitize_identifier("/a/b/c.wav"), "wav_c");
        assert_eq!(sanitize_identifier("sounds/startup_chime.wav"), "wav_startup_chime");
    }

    #[test]
    pub fn non_ascii_becomes_underscore() {
        assert_eq!(sanitize_identifier("Glöckchen.wav"), "wav_Gl_ckchen");
    }
}
