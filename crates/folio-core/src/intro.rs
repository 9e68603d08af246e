//! Intro sequencer.
//!
//! A fixed, linear run of phases: type the two intro lines, then type the
//! `projects` prompt and reveal the projects block, then the same for
//! `skills`. Each phase starts only after the previous one completed. The
//! sequencer owns every timer involved, so `restart` (or dropping it) is all
//! the cancellation there is.

use std::time::{Duration, Instant};

use crate::config::{PromptConfig, TimingConfig};
use crate::content::{ContentBlock, ContentContext, Projects, Script, Skills};
use crate::playback::Playback;
use crate::prompt;
use crate::reveal::RevealEvent;
use crate::style::{CARET, Style, StyledLine};
use crate::typing::TypingEffect;

const PROJECTS_COMMAND: &str = "projects";
const SKILLS_COMMAND: &str = "skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroPhase {
    TypingFirstLine,
    TypingSecondLine,
    PauseBeforeProjects,
    TypingProjectsPrompt,
    PauseAfterProjectsPrompt,
    RevealingProjects,
    PauseBeforeSkills,
    TypingSkillsPrompt,
    PauseAfterSkillsPrompt,
    RevealingSkills,
    Done,
}

/// Everything the intro shows, captured once so `restart` replays the same
/// content.
#[derive(Debug, Clone)]
pub struct IntroScript {
    pub headline: String,
    pub tagline: String,
    pub prompt: PromptConfig,
    pub timing: TimingConfig,
    pub projects: Script,
    pub skills: Script,
}

impl IntroScript {
    pub fn new(ctx: &ContentContext<'_>, prompt: &PromptConfig) -> Self {
        Self {
            headline: ctx.profile.headline().to_string(),
            tagline: ctx.profile.tagline().to_string(),
            prompt: prompt.clone(),
            timing: ctx.timing.clone(),
            projects: Projects.script(ctx),
            skills: Skills.script(ctx),
        }
    }

    fn type_interval(&self) -> Duration {
        Duration::from_millis(self.timing.type_ms)
    }

    fn prompt_interval(&self) -> Duration {
        Duration::from_millis(self.timing.prompt_type_ms)
    }

    fn pause(&self) -> Duration {
        Duration::from_millis(self.timing.pause_ms)
    }
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    script: IntroScript,
    phase: IntroPhase,
    first: TypingEffect,
    second: Option<TypingEffect>,
    projects_prompt: Option<TypingEffect>,
    projects: Option<Playback>,
    skills_prompt: Option<TypingEffect>,
    skills: Option<Playback>,
    /// End of the current pause, or when `Done` reports.
    deadline: Option<Instant>,
    skipped: bool,
    done_reported: bool,
}

impl IntroSequencer {
    pub fn new(script: IntroScript, now: Instant) -> Self {
        let first = TypingEffect::new(script.headline.clone(), script.type_interval(), now);
        Self {
            script,
            phase: IntroPhase::TypingFirstLine,
            first,
            second: None,
            projects_prompt: None,
            projects: None,
            skills_prompt: None,
            skills: None,
            deadline: None,
            skipped: false,
            done_reported: false,
        }
    }

    /// Starts over from the first phase with every guard reset.
    pub fn restart(&mut self, now: Instant) {
        let script = self.script.clone();
        *self = Self::new(script, now);
        tracing::debug!("intro restarted");
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// True once "sequence done" has been reported.
    pub fn is_done(&self) -> bool {
        self.done_reported
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped
    }

    fn enter(&mut self, phase: IntroPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "intro phase");
        self.phase = phase;
    }

    fn pause_then(&mut self, phase: IntroPhase, now: Instant) {
        self.deadline = Some(now + self.script.pause());
        self.enter(phase);
    }

    /// Deadline of the current pause if it has passed by `now`.
    fn elapsed_deadline(&self, now: Instant) -> Option<Instant> {
        self.deadline.filter(|deadline| now >= *deadline)
    }

    /// Advances the sequence to `now`.
    ///
    /// Returns `true` exactly once: when the sequence reports done.
    pub fn poll(&mut self, now: Instant) -> bool {
        loop {
            match self.phase {
                IntroPhase::TypingFirstLine => {
                    if !self.first.poll(now) {
                        return false;
                    }
                    let interval = self.script.type_interval();
                    self.second = Some(TypingEffect::new(
                        self.script.tagline.clone(),
                        interval,
                        now,
                    ));
                    self.enter(IntroPhase::TypingSecondLine);
                }
                IntroPhase::TypingSecondLine => {
                    if !self.second.as_mut().is_some_and(|t| t.poll(now)) {
                        return false;
                    }
                    self.pause_then(IntroPhase::PauseBeforeProjects, now);
                }
                IntroPhase::PauseBeforeProjects => {
                    let Some(at) = self.elapsed_deadline(now) else {
                        return false;
                    };
                    let interval = self.script.prompt_interval();
                    self.projects_prompt = Some(TypingEffect::new(PROJECTS_COMMAND, interval, at));
                    self.enter(IntroPhase::TypingProjectsPrompt);
                }
                IntroPhase::TypingProjectsPrompt => {
                    if !self.projects_prompt.as_mut().is_some_and(|t| t.poll(now)) {
                        return false;
                    }
                    self.pause_then(IntroPhase::PauseAfterProjectsPrompt, now);
                }
                IntroPhase::PauseAfterProjectsPrompt => {
                    let Some(at) = self.elapsed_deadline(now) else {
                        return false;
                    };
                    self.projects = Some(Playback::animated(self.script.projects.clone(), at));
                    self.enter(IntroPhase::RevealingProjects);
                }
                IntroPhase::RevealingProjects => {
                    if !Self::playback_finished(self.projects.as_mut(), now) {
                        return false;
                    }
                    self.pause_then(IntroPhase::PauseBeforeSkills, now);
                }
                IntroPhase::PauseBeforeSkills => {
                    let Some(at) = self.elapsed_deadline(now) else {
                        return false;
                    };
                    let interval = self.script.prompt_interval();
                    self.skills_prompt = Some(TypingEffect::new(SKILLS_COMMAND, interval, at));
                    self.enter(IntroPhase::TypingSkillsPrompt);
                }
                IntroPhase::TypingSkillsPrompt => {
                    if !self.skills_prompt.as_mut().is_some_and(|t| t.poll(now)) {
                        return false;
                    }
                    self.pause_then(IntroPhase::PauseAfterSkillsPrompt, now);
                }
                IntroPhase::PauseAfterSkillsPrompt => {
                    let Some(at) = self.elapsed_deadline(now) else {
                        return false;
                    };
                    self.skills = Some(Playback::animated(self.script.skills.clone(), at));
                    self.enter(IntroPhase::RevealingSkills);
                }
                IntroPhase::RevealingSkills => {
                    if !Self::playback_finished(self.skills.as_mut(), now) {
                        return false;
                    }
                    self.deadline =
                        Some(now + Duration::from_millis(self.script.timing.done_delay_ms));
                    self.enter(IntroPhase::Done);
                }
                IntroPhase::Done => {
                    if self.done_reported || self.elapsed_deadline(now).is_none() {
                        return false;
                    }
                    self.done_reported = true;
                    self.deadline = None;
                    tracing::debug!(skipped = self.skipped, "intro done");
                    return true;
                }
            }
        }
    }

    fn playback_finished(playback: Option<&mut Playback>, now: Instant) -> bool {
        playback.is_some_and(|p| p.poll(now).contains(&RevealEvent::Finished))
    }

    /// Jumps to `Done`, rendering everything in full; done is reported
    /// `skip_delay_ms` later.
    ///
    /// Returns `false` when there is nothing left to skip.
    pub fn skip(&mut self, now: Instant) -> bool {
        if self.done_reported || self.skipped {
            return false;
        }
        self.skipped = true;

        self.first.finish();
        let tagline = self.script.tagline.clone();
        finish_or_create(&mut self.second, &tagline);
        finish_or_create(&mut self.projects_prompt, PROJECTS_COMMAND);
        finish_or_create(&mut self.skills_prompt, SKILLS_COMMAND);
        skip_or_create(&mut self.projects, &self.script.projects);
        skip_or_create(&mut self.skills, &self.script.skills);

        let skip_at = now + Duration::from_millis(self.script.timing.skip_delay_ms);
        self.deadline = Some(match (self.phase, self.deadline) {
            (IntroPhase::Done, Some(existing)) => existing.min(skip_at),
            _ => skip_at,
        });
        self.enter(IntroPhase::Done);
        true
    }

    /// True while the sequence still needs polling.
    pub fn is_active(&self) -> bool {
        !self.done_reported
    }

    /// Currently visible intro output.
    pub fn lines(&self) -> Vec<StyledLine> {
        let mut lines = vec![typed_line(&self.first, Style::Headline)];

        if let Some(second) = &self.second {
            lines.push(typed_line(second, Style::Headline));
            lines.push(StyledLine::empty());
        }

        if let Some(typed) = &self.projects_prompt {
            lines.push(self.prompt_line(typed));
        }
        if let Some(playback) = &self.projects {
            lines.extend(playback.lines());
        }

        if let Some(typed) = &self.skills_prompt {
            lines.push(self.prompt_line(typed));
        }
        if let Some(playback) = &self.skills {
            lines.extend(playback.lines());
        }
        lines
    }

    fn prompt_line(&self, typed: &TypingEffect) -> StyledLine {
        let mut line =
            prompt::prefix(&self.script.prompt).push(typed.visible(), Style::CommandKnown);
        if typed.caret_visible() {
            line = line.push(CARET, Style::Caret);
        }
        line
    }
}

fn typed_line(effect: &TypingEffect, style: Style) -> StyledLine {
    let line = StyledLine::single(effect.visible(), style);
    if effect.caret_visible() {
        line.push(CARET, Style::Caret)
    } else {
        line
    }
}

fn finish_or_create(slot: &mut Option<TypingEffect>, text: &str) {
    match slot {
        Some(effect) => effect.finish(),
        None => *slot = Some(TypingEffect::finished(text)),
    }
}

fn skip_or_create(slot: &mut Option<Playback>, script: &Script) {
    match slot {
        Some(playback) => playback.skip_to_end(),
        None => *slot = Some(Playback::immediate(script.clone())),
    }
}
