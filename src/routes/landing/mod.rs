mod content;
mod fragments;

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use htmlescape::encode_minimal;

use crate::signup::FormStatus;
use crate::signup::SignupAttempt;

use content::BENEFITS;
use content::CONTACT_EMAIL;
use content::FAQS;
use content::FEATURES;
use content::QUOTES;
use content::STEPS;

/// `GET /`
///
/// A new page view always starts from an untouched form.
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(&SignupAttempt::default()))
}

/// The signup card: the form in every state but `Success`, where a
/// confirmation replaces it for good.
///
/// Real and honeypot successes render identically.
fn signup_card(attempt: &SignupAttempt) -> String {
    if let FormStatus::Success(_) = attempt.status() {
        return r#"<div class="text-sm md:text-base">
  <p class="font-medium">You're on the list ✅</p>
  <p class="mt-1 text-neutral-300">We'll email you as soon as onboarding opens.</p>
</div>"#
            .to_string();
    }

    let name = encode_minimal(attempt.name());
    let email = encode_minimal(attempt.email());
    let checked = match attempt.agree_to_contact() {
        true => " checked",
        false => "",
    };
    let (disabled, label) = match attempt.status() {
        FormStatus::Submitting => (" disabled", "Joining…"),
        _ => ("", "Join Early Access"),
    };
    let error = match attempt.status() {
        FormStatus::Error(e) => format!(
            r#"<p class="sm:col-span-2 text-pink-300 text-sm" role="alert">{}</p>"#,
            encode_minimal(&e.to_string())
        ),
        _ => String::new(),
    };

    format!(
        r#"<form action="/join" method="post" data-analytics="waitlist-form" class="grid sm:grid-cols-[1fr_auto] gap-3">
  <div class="grid gap-3 sm:col-span-2 sm:grid-cols-2">
    <input aria-label="Name" type="text" name="name" inputmode="text" autocomplete="name" value="{name}" placeholder="Your name (optional)" class="w-full rounded-xl bg-neutral-900 border border-white/10 px-4 py-3 outline-none focus:ring-2 focus:ring-white/30" />
    <input aria-label="Email" type="email" name="email" required inputmode="email" autocomplete="email" value="{email}" placeholder="you@domain.com" class="w-full rounded-xl bg-neutral-900 border border-white/10 px-4 py-3 outline-none focus:ring-2 focus:ring-white/30" />
    <!-- honeypot: people never see this, bots fill it in -->
    <input type="text" name="website" tabindex="-1" autocomplete="off" value="" class="hidden" aria-hidden="true" />
  </div>
  <button type="submit"{disabled} data-analytics="waitlist-submit" class="sm:row-span-2 inline-flex items-center justify-center rounded-xl bg-white text-neutral-900 font-medium px-5 py-3 hover:opacity-90 focus:ring-2 focus:ring-white/30 disabled:opacity-50">{label}</button>
  <label class="sm:col-span-2 flex items-start gap-2 text-xs text-neutral-300">
    <input type="checkbox" name="agree" value="on"{checked} class="mt-1" />
    I agree to receive emails about early access and product updates.
  </label>
  {error}
</form>"#
    )
}

/// The whole landing page around the signup card in its current state.
pub fn render_page(attempt: &SignupAttempt) -> String {
    let card = signup_card(attempt);
    let features = fragments::join_all(&FEATURES, fragments::feature);
    let badge = fragments::badge("Early Onboarding");
    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, s)| fragments::step(i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");
    let benefits = fragments::join_all(&BENEFITS, fragments::card);
    let quotes = fragments::join_all(&QUOTES, fragments::quote);
    let faqs = fragments::join_all(&FAQS, fragments::faq);

    format!(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>VISIONARY — Early Access</title>
    <script src="https://cdn.tailwindcss.com"></script>
  </head>
  <body>
    <main class="min-h-screen bg-neutral-950 text-neutral-100 selection:bg-white/20">
      <header class="sticky top-0 z-30 backdrop-blur supports-[backdrop-filter]:bg-neutral-950/50">
        <div class="mx-auto max-w-7xl px-4 py-4 flex items-center justify-between">
          <div class="font-semibold tracking-widest text-lg">VISIONARY</div>
          <nav class="hidden md:flex items-center gap-6 text-sm text-neutral-300">
            <a href="#how" class="hover:text-white">How it works</a>
            <a href="#benefits" class="hover:text-white">Benefits</a>
            <a href="#faq" class="hover:text-white">FAQ</a>
            <a href="#join" class="rounded-full border border-white/20 px-4 py-1.5 hover:bg-white hover:text-neutral-900 transition">Get early access</a>
          </nav>
        </div>
      </header>

      <section class="relative overflow-hidden">
        <div class="mx-auto max-w-7xl px-4 py-20 md:py-28 grid md:grid-cols-2 gap-10 items-center">
          <div>
            <p class="inline-block rounded-full border border-white/20 px-3 py-1 text-xs uppercase tracking-wider text-neutral-300 mb-5">
              Early Access • Crash‑Free Focus
            </p>
            <h1 class="text-4xl md:text-6xl font-semibold leading-tight">
              Focus, worn like <span class="italic">armor</span>.
            </h1>
            <p class="mt-5 text-neutral-300 md:text-lg max-w-prose">
              A transdermal caffeine patch engineered for smooth, calculated energy — move by move, hour by hour. Peel on for up to 8 hours of clarity; peel off to stop. No spikes. No crash.
            </p>
            <div id="join" class="mt-8 bg-white/5 border border-white/10 rounded-2xl p-4 md:p-6">
{card}
            </div>
            <p class="mt-4 text-xs text-neutral-400">No spam. Unsubscribe any time.</p>
          </div>

          <div class="relative">
            <div class="relative rounded-3xl border border-white/10 bg-gradient-to-br from-white/10 to-transparent p-6">
              <div class="grid gap-4">
{features}
              </div>
            </div>
            <div class="absolute -bottom-6 -right-6 hidden md:block">
              {badge}
            </div>
          </div>
        </div>
      </section>

      <section id="how" class="mx-auto max-w-7xl px-4 py-16 md:py-20">
        <h2 class="text-2xl md:text-3xl font-semibold">How VISIONARY Works</h2>
        <p class="mt-3 text-neutral-300 max-w-prose">Instead of flooding your system like coffee, VISIONARY uses transdermal delivery to release caffeine steadily — balanced with L‑theanine and green tea extract for calm precision. The result: focus that feels smooth, not frantic.</p>
        <div class="mt-8 grid md:grid-cols-3 gap-6">
{steps}
        </div>
      </section>

      <section id="benefits" class="bg-white/5 border-y border-white/10">
        <div class="mx-auto max-w-7xl px-4 py-16 md:py-20">
          <h2 class="text-2xl md:text-3xl font-semibold">Why builders choose VISIONARY</h2>
          <div class="mt-8 grid md:grid-cols-3 gap-6">
{benefits}
          </div>
        </div>
      </section>

      <section class="mx-auto max-w-7xl px-4 py-16 md:py-20">
        <h2 class="text-2xl md:text-3xl font-semibold">What early users say</h2>
        <div class="mt-8 grid md:grid-cols-3 gap-6">
{quotes}
        </div>
      </section>

      <section id="faq" class="mx-auto max-w-7xl px-4 py-16 md:py-20">
        <h2 class="text-2xl md:text-3xl font-semibold">FAQ</h2>
        <div class="mt-6 space-y-4">
{faqs}
        </div>
      </section>

      <footer class="border-t border-white/10">
        <div class="mx-auto max-w-7xl px-4 py-10 text-sm text-neutral-400 grid md:grid-cols-2 gap-6">
          <div>
            <div class="font-semibold tracking-widest text-neutral-200">VISIONARY</div>
            <p class="mt-2 max-w-prose">Crash‑free clarity you control. A modern ritual for people building the next world.</p>
          </div>
          <div class="grid sm:grid-cols-3 gap-3">
            <ul class="space-y-2">
              <li><a href="#how" class="hover:text-white">How it works</a></li>
              <li><a href="#benefits" class="hover:text-white">Benefits</a></li>
              <li><a href="#faq" class="hover:text-white">FAQ</a></li>
            </ul>
            <ul class="space-y-2">
              <li><a href="#join" class="hover:text-white">Join Early Access</a></li>
              <li><a href="#" class="hover:text-white">Privacy</a></li>
              <li><a href="#" class="hover:text-white">Terms</a></li>
            </ul>
            <ul class="space-y-2">
              <li class="text-neutral-300">Contact</li>
              <li><a href="mailto:{CONTACT_EMAIL}" class="hover:text-white">{CONTACT_EMAIL}</a></li>
            </ul>
          </div>
        </div>
      </footer>
    </main>
  </body>
</html>
"##
    )
}
