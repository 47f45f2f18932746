use regex::Regex;

use crate::project::ProjectState;

/// File recognized as an author-supplied top-level markup document.
pub const MARKUP_DOCUMENT: &str = "index.html";

/// Entry script candidates, in priority order.
pub const ENTRY_SCRIPT_CANDIDATES: &[&str] = &["App.js", "App.jsx"];

/// Stylesheet candidates, in priority order.
pub const STYLESHEET_CANDIDATES: &[&str] = &["styles.css", "App.css", "index.css"];

/// Assemble a single sandbox-renderable document from the project state.
///
/// Selection policy, in priority order:
///
/// 1. An `index.html` in the state is returned verbatim; the author is
///    assumed to have produced a complete document.
/// 2. Otherwise a document is synthesized around the first entry script
///    candidate, with the first stylesheet candidate embedded (missing
///    stylesheet defaults to empty).
/// 3. With neither markup nor entry script, a static placeholder document
///    is returned. Never an empty string, never an error.
///
/// The synthesized document carries its own failure isolation: script
/// execution and mounting happen inside a try/catch whose failure path
/// renders inline diagnostic text, and the optional animation runtimes are
/// shimmed when their CDN includes did not load.
pub fn assemble(state: &ProjectState) -> String {
    if let Some(markup) = state.get(MARKUP_DOCUMENT) {
        return markup.to_string();
    }

    let entry_script = ENTRY_SCRIPT_CANDIDATES
        .iter()
        .find_map(|name| state.get(name));

    let Some(entry_script) = entry_script else {
        return PLACEHOLDER_DOCUMENT.to_string();
    };

    let stylesheet = STYLESHEET_CANDIDATES
        .iter()
        .find_map(|name| state.get(name))
        .unwrap_or("");

    let script = sanitize_module_syntax(entry_script);

    format!("{DOCUMENT_HEAD}{stylesheet}\n{DOCUMENT_BODY}{script}\n{DOCUMENT_MOUNT}")
}

/// Strip module syntax from an entry script so it can run as a plain
/// inline script.
///
/// Removes, by textual pattern matching: side-effect-only imports, default
/// imports, named-import lists, combined default+named imports, and export
/// declarations (default and non-default), then collapses the blank lines
/// left behind. Best-effort text transform, not a grammar-aware rewrite;
/// comments or string literals that happen to match import/export syntax
/// may be affected.
pub fn sanitize_module_syntax(script: &str) -> String {
    let import_patterns = [
        // Whole-line imports (side-effect-only and simple default forms).
        r#"(?m)^import\s+.*?;?\s*$"#,
        // Named-import lists.
        r#"import\s*\{[^}]*\}\s*from\s*['"][^'"]*['"];?\s*"#,
        // Combined default + named imports.
        r#"import\s+\w+\s*,\s*\{[^}]*\}\s*from\s*['"][^'"]*['"];?\s*"#,
        // Default imports.
        r#"import\s+\w+\s+from\s*['"][^'"]*['"];?\s*"#,
        // Side-effect-only imports.
        r#"import\s*['"][^'"]*['"];?\s*"#,
    ];

    let mut out = script.to_string();
    for pattern in import_patterns {
        let re = Regex::new(pattern).unwrap();
        out = re.replace_all(&out, "").to_string();
    }

    let export_default = Regex::new(r"export\s+default\s+").unwrap();
    out = export_default.replace_all(&out, "").to_string();

    let export = Regex::new(r"export\s+").unwrap();
    out = export.replace_all(&out, "").to_string();

    let blank_lines = Regex::new(r"(?m)^\s*\n").unwrap();
    blank_lines.replace_all(&out, "").to_string()
}

/// Head of the synthesized document: runtime bootstrap includes and the
/// base style block the project stylesheet is appended to.
///
/// The bootstrap list is fixed: a rendering library, a source transform to
/// execute the entry script's syntax in place, and two optional animation
/// libraries. Their unavailability is tolerated by the shims in
/// [`DOCUMENT_BODY`], never treated as fatal.
const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Generated App</title>
  <script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
  <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
  <script src="https://unpkg.com/@babel/standalone/babel.min.js"></script>
  <script src="https://unpkg.com/framer-motion@10/dist/framer-motion.js"></script>
  <script src="https://unpkg.com/gsap@3/dist/gsap.min.js"></script>
  <style>
    body {
      margin: 0;
      padding: 0;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    }
    * { box-sizing: border-box; }
"#;

/// Start of the document body: mount node, hook aliases, and inert shims
/// for the optional animation runtimes.
const DOCUMENT_BODY: &str = r#"  </style>
</head>
<body>
  <div id="root"></div>
  <script type="text/babel">
    // Hooks are used without imports after sanitization.
    const { useState, useEffect, useCallback, useMemo, useRef } = React;

    const FramerMotion = window.FramerMotion || {};
    const { motion, AnimatePresence } = FramerMotion;
    const gsap = window.gsap;

    if (!motion) {
      window.motion = {
        div: 'div',
        span: 'span',
        p: 'p',
        h1: 'h1', h2: 'h2', h3: 'h3',
        button: 'button',
        section: 'section',
        article: 'article',
        header: 'header',
        footer: 'footer',
        nav: 'nav'
      };
      console.warn('Framer Motion not loaded - using fallback elements');
    }

    if (!gsap) {
      window.gsap = {
        to: () => {},
        from: () => {},
        timeline: () => ({ to: () => {}, from: () => {} }),
        set: () => {}
      };
      console.warn('GSAP not loaded - using fallback functions');
    }

"#;

/// Mount routine appended after the sanitized entry script.
///
/// Prefers a symbol named `App`; otherwise takes the first global that is
/// callable, starts with an uppercase letter, and is not a known runtime
/// global. Every failure here resolves to inline diagnostic text in the
/// mount node, never a blank document.
const DOCUMENT_MOUNT: &str = r#"
    const rootElement = document.getElementById('root');
    if (rootElement && typeof React !== 'undefined' && typeof ReactDOM !== 'undefined') {
      try {
        if (typeof App !== 'undefined') {
          const root = ReactDOM.createRoot(rootElement);
          root.render(React.createElement(App));
        } else {
          const runtimeGlobals = ['React', 'ReactDOM', 'Babel', 'FramerMotion'];
          const componentNames = Object.keys(window).filter(key =>
            typeof window[key] === 'function' &&
            key[0] === key[0].toUpperCase() &&
            !runtimeGlobals.includes(key)
          );

          if (componentNames.length > 0) {
            const root = ReactDOM.createRoot(rootElement);
            root.render(React.createElement(window[componentNames[0]]));
          } else {
            rootElement.innerHTML = '<div style="padding: 20px; color: red; font-family: monospace;">No component found to mount. Name your root component "App".</div>';
          }
        }
      } catch (error) {
        console.error('Preview error:', error);
        rootElement.innerHTML = '<div style="padding: 20px; color: red; font-family: monospace;">Error: ' + error.message + '</div>';
      }
    } else {
      document.body.innerHTML = '<div style="padding: 20px; color: red; font-family: monospace;">Runtime libraries failed to load</div>';
    }
  </script>
</body>
</html>
"#;

/// Returned when the state has neither a markup document nor an entry
/// script.
const PLACEHOLDER_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>No Preview</title>
    <style>
      body {
        margin: 0;
        padding: 40px;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        font-family: system-ui;
        color: white;
        text-align: center;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
      }
    </style>
  </head>
  <body>
    <div>
      <h2>No Preview Available</h2>
      <p>Generate a project to see live preview</p>
    </div>
  </body>
</html>
"#;
