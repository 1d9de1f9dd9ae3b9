/// Parse an annotation source into an [`AnnotationMap`].
///
/// This is the main public entrypoint for parsing. The source is taken as bytes because invalid
/// UTF-8 is reported as an [`AnnotationError::Encoding`] with its position.
///
/// ## Errors
/// Returns the first [`AnnotationError`] encountered; no partial map is returned.
#[tracing::instrument(skip_all, fields(source_len = source.as_ref().len()))]
pub fn parse<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<AnnotationMap, AnnotationError> {
    Parser::new(source).parse()
}
