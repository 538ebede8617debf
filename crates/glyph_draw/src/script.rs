//! Key scripts
//!
//! Plain characters are key presses, line breaks are ignored. Everything
//! else is written as a tag:
//!
//! | tag                                   | event                                   |
//! |---------------------------------------|-----------------------------------------|
//! | `<up>` `<down>` `<left>` `<right>`    | cursor keys, `<S-up>` etc. pan the view |
//! | `<enter>` `<esc>` `<bs>` `<tab>`      | the named key                           |
//! | `<lt>`                                | a literal `<`                           |
//! | `<press x y>` `<move x y>` `<release x y>` | pointer events                     |
//! | `<click x y>`                         | press and release                       |
//! | `<tool NAME>` `<shape NAME>`          | tool and shape menu, by short name      |
//! | `<brush N>` `<pattern NAME>`          | brush and pattern menu                  |
//! | `<fg NAME>` `<bg NAME>`               | color menu, by name or index            |
//! | `<layer N>` `<hide N>` `<lock N>`     | layer menu                              |
//! | `<add-layer>` `<delete-layer>` `<cancel>` | layer menu and cancel               |

use std::{collections::VecDeque, time::Duration};

use anyhow::{Context, bail};
use glyph_engine::{
    EditorEvent, InputEvent, InputSource, Key, LayerMenuChoice, MenuChoice, PointerEvent, PointerState, Poll, Position, brushes::PATTERNS, palette,
    tools::TOOLS,
};

pub fn parse_script(text: &str) -> anyhow::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' | '\r' => {}
            '<' => {
                let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
                parse_tag(tag.trim(), &mut events).with_context(|| format!("in tag <{tag}>"))?;
            }
            ch => events.push(Key::Char(ch).into()),
        }
    }
    Ok(events)
}

fn parse_tag(tag: &str, events: &mut Vec<InputEvent>) -> anyhow::Result<()> {
    let mut words = tag.split_whitespace();
    let Some(name) = words.next() else {
        bail!("empty tag");
    };
    let args: Vec<&str> = words.collect();

    let key = match name {
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "S-up" => Some(Key::ShiftUp),
        "S-down" => Some(Key::ShiftDown),
        "S-left" => Some(Key::ShiftLeft),
        "S-right" => Some(Key::ShiftRight),
        "enter" => Some(Key::Enter),
        "esc" => Some(Key::Escape),
        "bs" => Some(Key::Backspace),
        "tab" => Some(Key::Tab),
        "lt" => Some(Key::Char('<')),
        _ => None,
    };
    if let Some(key) = key {
        events.push(key.into());
        return Ok(());
    }

    match name {
        "press" => events.push(pointer(&args, PointerState::Pressed)?),
        "move" => events.push(pointer(&args, PointerState::Moved)?),
        "release" => events.push(pointer(&args, PointerState::Released)?),
        "click" => {
            events.push(pointer(&args, PointerState::Pressed)?);
            events.push(pointer(&args, PointerState::Released)?);
        }
        _ => events.push(menu(name, &args)?.into()),
    }
    Ok(())
}

fn pointer(args: &[&str], state: PointerState) -> anyhow::Result<InputEvent> {
    let [x, y] = args else {
        bail!("expected two coordinates");
    };
    let pos = Position::new(x.parse().context("x coordinate")?, y.parse().context("y coordinate")?);
    Ok(PointerEvent::new(pos, state).into())
}

fn single<'a>(args: &[&'a str]) -> anyhow::Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => bail!("expected one argument"),
    }
}

fn menu(name: &str, args: &[&str]) -> anyhow::Result<MenuChoice> {
    let choice = match name {
        "tool" | "shape" => {
            let arg = single(args)?;
            let Some(tool) = TOOLS.iter().copied().find(|t| t.name() == arg) else {
                bail!("unknown tool '{arg}'");
            };
            if name == "tool" { MenuChoice::Tool(tool) } else { MenuChoice::Shape(tool) }
        }
        "brush" => MenuChoice::Brush(single(args)?.parse()?),
        "pattern" => {
            let arg = single(args)?;
            let Some(pattern) = PATTERNS.iter().copied().find(|p| p.name() == arg) else {
                bail!("unknown pattern '{arg}'");
            };
            MenuChoice::Pattern(pattern)
        }
        "fg" => {
            let arg = single(args)?;
            MenuChoice::Foreground(color(arg, palette::fg_index(arg))?)
        }
        "bg" => {
            let arg = single(args)?;
            MenuChoice::Background(color(arg, palette::bg_index(arg))?)
        }
        "layer" => MenuChoice::Layer(LayerMenuChoice::Select(single(args)?.parse()?)),
        "hide" => MenuChoice::Layer(LayerMenuChoice::ToggleVisibility(single(args)?.parse()?)),
        "lock" => MenuChoice::Layer(LayerMenuChoice::ToggleLock(single(args)?.parse()?)),
        "add-layer" => MenuChoice::Layer(LayerMenuChoice::Add),
        "delete-layer" => MenuChoice::Layer(LayerMenuChoice::Delete),
        "cancel" => MenuChoice::Cancel,
        _ => bail!("unknown tag"),
    };
    Ok(choice)
}

fn color(arg: &str, by_name: Option<u8>) -> anyhow::Result<u8> {
    match by_name {
        Some(index) => Ok(index),
        None => arg.parse().with_context(|| format!("unknown color '{arg}'")),
    }
}

/// Feeds a parsed script to the event loop, then closes.
pub struct ScriptInput {
    events: VecDeque<InputEvent>,
}

impl ScriptInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events: events.into() }
    }
}

impl InputSource for ScriptInput {
    fn poll(&mut self, _timeout: Duration) -> Poll {
        match self.events.pop_front() {
            Some(event) => Poll::Event(event),
            None => Poll::Closed,
        }
    }

    fn editor_event(&mut self, event: EditorEvent) {
        // scripts answer menus with explicit tags
        log::debug!("ignoring {event:?}");
    }
}
