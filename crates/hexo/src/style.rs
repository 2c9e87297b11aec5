//! Static style sheet for rendered callouts.
//!
//! The rules target the markup produced by [`render_callout`](crate::render::render_callout):
//! a `.note` box, one `.note-{class}` color rule per registry class, and the
//! title/content layout. The block is identical for every document.

/// `<style>` block prepended to every converted document.
pub const CALLOUT_STYLESHEET: &str = r#"<style>
@import url('https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&display=swap');

.note {
  margin: 1.5em 0;
  padding: 1.2em;
  border: 2px solid;
  border-radius: 8px;
  background: linear-gradient(135deg, #0a0a0a 0%, #1a1a2e 50%, #16213e 100%);
  box-shadow: 0 0 20px rgba(0, 255, 255, 0.3), inset 0 0 20px rgba(0, 0, 0, 0.5);
  font-family: 'Orbitron', monospace;
  position: relative;
  overflow: hidden;
}

.note::before {
  content: '';
  position: absolute;
  top: 0;
  left: -100%;
  width: 100%;
  height: 100%;
  background: linear-gradient(90deg, transparent, rgba(0, 255, 255, 0.1), transparent);
  animation: scan 3s infinite;
}

@keyframes scan {
  0% { left: -100%; }
  100% { left: 100%; }
}

.note-info {
  border-color: #00ffff;
  color: #00ffff;
  text-shadow: 0 0 10px #00ffff;
}

.note-tip {
  border-color: #39ff14;
  color: #39ff14;
  text-shadow: 0 0 10px #39ff14;
}

.note-warning {
  border-color: #ffff00;
  color: #ffff00;
  text-shadow: 0 0 10px #ffff00;
}

.note-danger {
  border-color: #ff073a;
  color: #ff073a;
  text-shadow: 0 0 10px #ff073a;
}

.note-example {
  border-color: #ff00ff;
  color: #ff00ff;
  text-shadow: 0 0 10px #ff00ff;
}

.note-quote {
  border-color: #9d4edd;
  color: #9d4edd;
  text-shadow: 0 0 10px #9d4edd;
}

.note-title {
  font-weight: 900;
  font-size: 1.1em;
  margin-bottom: 0.8em;
  display: flex;
  align-items: center;
  text-transform: uppercase;
  letter-spacing: 2px;
  border-bottom: 1px solid currentColor;
  padding-bottom: 0.5em;
  position: relative;
  z-index: 1;
}

.note-icon {
  margin-right: 0.8em;
  font-size: 1.2em;
  filter: drop-shadow(0 0 5px currentColor);
}

.note-text {
  position: relative;
}

.note-content {
  position: relative;
  z-index: 1;
}

.note-content p {
  margin: 0.8em 0;
  line-height: 1.6;
  font-weight: 400;
  background: rgba(0, 0, 0, 0.3);
  padding: 0.5em;
  border-radius: 4px;
  border-left: 3px solid currentColor;
}

.note-content p:first-child {
  margin-top: 0;
}

.note-content p:last-child {
  margin-bottom: 0;
}

.note-title::after {
  content: '';
  position: absolute;
  right: 0;
  top: 50%;
  transform: translateY(-50%);
  width: 8px;
  height: 8px;
  background: currentColor;
  border-radius: 50%;
  animation: blink 1.5s infinite;
}

@keyframes blink {
  0%, 50% { opacity: 1; }
  51%, 100% { opacity: 0; }
}

.note:hover {
  transform: translateY(-2px);
  box-shadow: 0 0 30px rgba(0, 255, 255, 0.5), inset 0 0 30px rgba(0, 0, 0, 0.7);
  transition: all 0.3s ease;
}

.note:hover .note-title {
  animation: glitch 0.5s infinite;
}

@keyframes glitch {
  0% { transform: translateX(0); }
  10% { transform: translateX(-2px); }
  20% { transform: translateX(2px); }
  30% { transform: translateX(-1px); }
  40% { transform: translateX(1px); }
  50% { transform: translateX(0); }
  100% { transform: translateX(0); }
}

@media (max-width: 768px) {
  .note {
    margin: 1em 0;
    padding: 1em;
  }
  
  .note-title {
    font-size: 1em;
    letter-spacing: 1px;
  }
}
</style>"#;
