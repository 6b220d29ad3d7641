// File: crates/viewership-core/src/html.rs
// Summary: Standalone HTML page embedding the SVG with fading hover tooltips.

use crate::scene::Scene;
use crate::svg::{escape, to_svg};

const STYLE: &str = r#"
  body { font-family: sans-serif; }
  div.tooltip, div.avg {
    position: absolute;
    opacity: 0;
    padding: 4px 8px;
    font-size: 9pt;
    white-space: pre-line;
    background: #f4f4f4;
    border: 1px solid grey;
    border-radius: 4px;
    pointer-events: none;
    transition-property: opacity;
  }
"#;

// Moves each <title> into a data attribute so only the styled box shows on hover.
const SCRIPT: &str = r#"
(function () {
  var boxes = { tooltip: document.querySelector('div.tooltip'), avg: document.querySelector('div.avg') };
  document.querySelectorAll('[data-tooltip]').forEach(function (el) {
    var title = el.querySelector('title');
    var text = title ? title.textContent : '';
    if (title) { title.remove(); }
    var box = boxes[el.getAttribute('data-tooltip')];
    el.addEventListener('mouseover', function (ev) {
      box.textContent = text;
      box.style.left = ev.pageX + 'px';
      box.style.top = (ev.pageY - 28) + 'px';
      box.style.transitionDuration = '200ms';
      box.style.opacity = '0.9';
    });
    el.addEventListener('mouseout', function () {
      box.style.transitionDuration = '500ms';
      box.style.opacity = '0';
    });
  });
})();
"#;

pub fn to_html(scene: &Scene, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{}<div class=\"tooltip\"></div>\n<div class=\"avg\"></div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n",
        escape(title),
        to_svg(scene),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn page_carries_svg_and_both_tooltip_boxes() {
        let html = to_html(&Scene::new(750, 500, Rgba::WHITE), "A & B");
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<svg "));
        assert!(html.contains(r#"<div class="tooltip"></div>"#));
        assert!(html.contains(r#"<div class="avg"></div>"#));
    }
}
