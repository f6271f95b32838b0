//! Automatic heading identifiers for deep-linking

use std::collections::{HashMap, VecDeque};

use pulldown_cmark::{Event, Tag, TagEnd};

/// Turn heading text into an anchor slug.
///
/// Characters are transliterated to ASCII first; ASCII alphanumerics and `_`
/// are kept (lowercased) and every other run collapses into a single `-`.
/// Leading and trailing separators are dropped.
pub fn slugify(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    let mut need_dash = false;
    for ch in text.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("-").bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {
                    if need_dash {
                        output.push('-');
                        need_dash = false;
                    }

                    output.push(b.to_ascii_lowercase() as char);
                }
                _ => need_dash = !output.is_empty(),
            }
        }
    }

    output
}

/// Hands out unique slugs within one document.
#[derive(Debug, Default)]
struct SlugRegistry {
    // slug -> highest numeric suffix handed out for it
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }

    fn unique(&mut self, slug: String) -> String {
        let mut n = match self.seen.get(&slug) {
            Some(n) => *n,
            None => {
                self.seen.insert(slug.clone(), 0);
                return slug;
            }
        };

        let id = loop {
            n += 1;
            let candidate = format!("{slug}-{n}");
            if !self.seen.contains_key(&candidate) {
                break candidate;
            }
        };

        self.seen.insert(slug, n);
        self.seen.insert(id.clone(), 0);
        id
    }
}

/// Event adapter that fills in `id` on every heading that lacks one.
///
/// The whole event stream is buffered up front so that explicit ids anywhere in
/// the document are reserved before any generated id is handed out.
pub struct HeadingIds<'a> {
    stack: VecDeque<Event<'a>>,
    slugs: SlugRegistry,
    inner: std::vec::IntoIter<Event<'a>>,
}

impl<'a> HeadingIds<'a> {
    pub fn new<I: Iterator<Item = Event<'a>>>(events: I) -> Self {
        let events: Vec<Event<'a>> = events.collect();

        let mut slugs = SlugRegistry::default();
        for event in &events {
            if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
                slugs.reserve(id);
            }
        }

        Self {
            stack: VecDeque::with_capacity(4),
            slugs,
            inner: events.into_iter(),
        }
    }
}

impl<'a> Iterator for HeadingIds<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.stack.pop_front() {
            return Some(event);
        }

        match self.inner.next()? {
            Event::Start(Tag::Heading { level, id: None, classes, attrs }) => {
                let mut text = String::new();
                for event in self.inner.by_ref() {
                    match event {
                        Event::Text(ref s) | Event::Code(ref s) => text.push_str(s),
                        Event::SoftBreak | Event::HardBreak => text.push(' '),
                        Event::End(TagEnd::Heading(..)) => break,
                        _ => {}
                    }

                    self.stack.push_back(event);
                }

                let slug = slugify(&text);
                let id = if slug.is_empty() {
                    None
                } else {
                    Some(self.slugs.unique(slug).into())
                };

                self.stack.push_back(Event::End(TagEnd::Heading(level)));
                Some(Event::Start(Tag::Heading { level, id, classes, attrs }))
            }
            event => Some(event),
        }
    }
}
