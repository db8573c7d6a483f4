use anyhow::bail;
use regex::Regex;

/// Returns the raw text of the `<script>` element whose `id` attribute is `element_id`.
///
/// The payload is taken verbatim; entities are not decoded.
pub fn extract_inline_element<'a>(html: &'a str, element_id: &str) -> anyhow::Result<&'a str> {
  let pattern = format!(
    r#"(?is)<script\b[^>]*\bid\s*=\s*["']{}["'][^>]*>(.*?)</script\s*>"#,
    regex::escape(element_id)
  );
  let re = Regex::new(&pattern)?;

  let Some(text) = re.captures(html).and_then(|captures| captures.get(1)) else {
    bail!("No `<script id=\"{element_id}\">` element found");
  };
  Ok(text.as_str().trim())
}
