//! Stateless markup pieces. Every piece of copy is escaped on the way in, so
//! the tables in `content` hold plain text.

use htmlescape::encode_minimal;

use super::content::Card;
use super::content::Faq;
use super::content::Feature;
use super::content::Quote;
use super::content::Step;

pub fn feature(f: &Feature) -> String {
    format!(
        r#"<div class="rounded-xl border border-white/10 bg-neutral-900/40 p-4">
  <p class="font-medium">{}</p>
  <p class="text-neutral-300 text-sm mt-1">{}</p>
</div>"#,
        encode_minimal(f.title),
        encode_minimal(f.desc)
    )
}

pub fn badge(label: &str) -> String {
    let label = encode_minimal(label);
    format!(
        r#"<div class="rounded-full bg-white text-neutral-900 px-4 py-2 text-xs font-semibold shadow-xl">{label}</div>"#
    )
}

/// `n` is 1-based.
pub fn step(
    n: usize,
    s: &Step,
) -> String {
    format!(
        r#"<div class="rounded-2xl border border-white/10 bg-neutral-900/40 p-5">
  <div class="flex items-center gap-3">
    <div class="h-8 w-8 rounded-full bg-white text-neutral-900 grid place-items-center font-bold">{n}</div>
    <p class="font-medium">{}</p>
  </div>
  <p class="mt-2 text-neutral-300 text-sm">{}</p>
</div>"#,
        encode_minimal(s.title),
        encode_minimal(s.desc)
    )
}

pub fn card(c: &Card) -> String {
    format!(
        r#"<div class="rounded-2xl border border-white/10 bg-neutral-900/40 p-5">
  <p class="font-medium">{}</p>
  <p class="mt-2 text-neutral-300 text-sm">{}</p>
</div>"#,
        encode_minimal(c.title),
        encode_minimal(c.body)
    )
}

pub fn quote(q: &Quote) -> String {
    format!(
        r#"<blockquote class="rounded-2xl border border-white/10 bg-neutral-900/40 p-5">
  <p class="text-neutral-200">“{}”</p>
  <cite class="mt-3 block text-neutral-400 text-sm">— {}</cite>
</blockquote>"#,
        encode_minimal(q.text),
        encode_minimal(q.name)
    )
}

/// Collapsed by default; `<details>` needs no script to open.
pub fn faq(f: &Faq) -> String {
    format!(
        r#"<details class="group rounded-2xl border border-white/10 bg-neutral-900/40 p-5">
  <summary class="cursor-pointer list-none font-medium flex items-center justify-between">
    <span>{}</span>
    <span class="ml-4 text-neutral-400 group-open:rotate-45 transition">+</span>
  </summary>
  <p class="mt-3 text-neutral-300 text-sm">{}</p>
</details>"#,
        encode_minimal(f.q),
        encode_minimal(f.a)
    )
}

/// Render every item and concatenate.
pub fn join_all<T>(
    items: &[T],
    render: impl Fn(&T) -> String,
) -> String {
    items.iter().map(render).collect::<Vec<_>>().join("\n")
}
