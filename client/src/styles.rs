use leptos::prelude::*;

const PAGE_CSS: &str = r#"
@keyframes petal-fall {
  0%   { top: -24px; margin-left: 0; opacity: 0; }
  10%  { opacity: 1; }
  55%  { margin-left: 18px; }
  100% { top: 105vh; margin-left: -14px; opacity: 0.1; }
}

.petal {
  user-select: none;
}

@keyframes status-pulse {
  0%, 100% { opacity: 0.45; }
  50%      { opacity: 1; }
}

.status-pulse {
  animation: status-pulse 1.6s ease-in-out infinite;
}

.board-enter {
  opacity: 0;
  transform: translateY(10px);
  transition: opacity 0.5s ease, transform 0.5s ease;
}

.board-enter-done {
  opacity: 1;
  transform: translateY(0);
}

.text-gold-gradient {
  background: linear-gradient(180deg, #f5d87a, #c9983a);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
"#;

/// Keyframes and the handful of shared classes the page components rely on.
/// The app is CSR-only and owns the whole document, so the stylesheet ships
/// with the component tree.
#[component]
pub fn BoardStyles() -> impl IntoView {
    view! { <style inner_html=PAGE_CSS /> }
}
