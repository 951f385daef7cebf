/*!
 * Run State
 * Simulated clock, working entries, and output recording for one run
 */

use super::entry::Entry;
use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Dispatch, Occupant, Process, ProcessStats, Simulation, Time};
use crate::scheduler::metrics;
use crate::scheduler::timeline::TimelineBuilder;
use tracing::trace;

/// Mutable state for a single simulation
///
/// Built from the caller's processes, consumed by `finish`. Entries keep the
/// input order so indices are stable for the whole run.
#[derive(Debug)]
pub(crate) struct RunState {
    entries: Vec<Entry>,
    now: Time,
    horizon: Time,
    finished: usize,
    timeline: TimelineBuilder,
    dispatches: Vec<Dispatch>,
}

impl RunState {
    pub fn new(processes: &[Process]) -> SimResult<Self> {
        let horizon = safety_horizon(processes)?;

        Ok(Self {
            entries: processes.iter().map(Entry::new).collect(),
            now: 0,
            horizon,
            finished: 0,
            timeline: TimelineBuilder::new(),
            dispatches: Vec::new(),
        })
    }

    #[inline(always)]
    pub fn now(&self) -> Time {
        self.now
    }

    #[inline(always)]
    pub fn entry(&self, idx: usize) -> &Entry {
        &self.entries[idx]
    }

    #[inline(always)]
    pub fn entry_mut(&mut self, idx: usize) -> &mut Entry {
        &mut self.entries[idx]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn all_done(&self) -> bool {
        self.finished == self.entries.len()
    }

    /// Indices of processes that have arrived and still need the CPU
    pub fn ready(&self) -> impl Iterator<Item = usize> + '_ {
        let now = self.now;
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.is_ready(now))
            .map(|(idx, _)| idx)
    }

    /// Ready process minimising `key`, with arrival then pid as final tie-breaks
    pub fn pick_min_by<K: Ord>(&self, key: impl Fn(&Entry) -> K) -> Option<usize> {
        self.ready()
            .min_by_key(|&idx| {
                let entry = &self.entries[idx];
                (key(entry), entry.arrival_key())
            })
    }

    /// Indices of unfinished processes sorted by arrival then pid
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by_key(|&idx| self.entries[idx].arrival_key());
        order
    }

    /// Fast-forward an idle CPU to the next pending arrival
    pub fn idle_until_next_arrival(&mut self) -> SimResult<()> {
        let now = self.now;
        let next = self
            .entries
            .iter()
            .filter(|e| !e.is_done() && e.arrival > now)
            .map(|e| e.arrival)
            .min()
            .ok_or_else(|| {
                SimError::fault(format!(
                    "CPU idle at t={now} with {} unfinished processes and no pending arrival",
                    self.entries.len() - self.finished
                ))
            })?;

        trace!(from = now, to = next, "cpu idle");
        self.timeline.push(Occupant::Idle, now, next);
        self.now = next;
        self.check_horizon()
    }

    /// Start a new dispatch of `idx` for up to `slice` ticks; returns ticks run
    pub fn dispatch(&mut self, idx: usize, slice: Time, level: Option<usize>) -> SimResult<Time> {
        let start = self.now;
        let ran = self.execute(idx, slice)?;
        self.dispatches.push(Dispatch {
            pid: self.entries[idx].pid,
            start,
            end: self.now,
            level,
        });
        Ok(ran)
    }

    /// Run `idx` for up to `slice` ticks, folding into the previous dispatch
    /// when the same process simply keeps the CPU
    pub fn continue_or_dispatch(&mut self, idx: usize, slice: Time) -> SimResult<Time> {
        let pid = self.entries[idx].pid;
        let start = self.now;
        let continuing = matches!(self.dispatches.last(), Some(d) if d.pid == pid && d.end == start);

        let ran = self.execute(idx, slice)?;
        match self.dispatches.last_mut() {
            Some(last) if continuing => last.end = self.now,
            _ => self.dispatches.push(Dispatch {
                pid,
                start,
                end: self.now,
                level: None,
            }),
        }
        Ok(ran)
    }

    fn execute(&mut self, idx: usize, slice: Time) -> SimResult<Time> {
        let now = self.now;
        let entry = &mut self.entries[idx];
        if entry.arrival > now || entry.is_done() {
            return Err(SimError::fault(format!(
                "process {} dispatched at t={now} but is not ready",
                entry.pid
            )));
        }

        let ran = slice.min(entry.remaining);
        if ran == 0 {
            return Err(SimError::fault(format!(
                "zero-length dispatch of process {} at t={now}",
                entry.pid
            )));
        }

        let end = now.checked_add(ran).ok_or_else(|| {
            SimError::fault(format!("clock overflow running process {} at t={now}", entry.pid))
        })?;

        entry.first_dispatch.get_or_insert(now);
        entry.remaining -= ran;
        if entry.remaining == 0 {
            entry.completion = Some(end);
            self.finished += 1;
        }

        let pid = entry.pid;
        trace!(pid, start = now, end, "run");
        self.timeline.push(Occupant::Process { pid }, now, end);
        self.now = end;
        self.check_horizon()?;
        Ok(ran)
    }

    fn check_horizon(&self) -> SimResult<()> {
        if self.now > self.horizon {
            return Err(SimError::fault(format!(
                "clock reached t={} past safety bound {}",
                self.now, self.horizon
            )));
        }
        Ok(())
    }

    /// Compute per-process results and aggregates
    pub fn finish(self) -> SimResult<Simulation> {
        if !self.all_done() {
            return Err(SimError::fault(format!(
                "run ended at t={} with {} unfinished processes",
                self.now,
                self.entries.len() - self.finished
            )));
        }

        let mut results = self
            .entries
            .iter()
            .map(result_for)
            .collect::<SimResult<Vec<_>>>()?;
        results.sort_by_key(|r| r.pid);

        let timeline = self.timeline.into_segments();
        let averages = metrics::averages(&results);
        let stats = metrics::timeline_stats(&timeline, &self.dispatches, results.len());

        Ok(Simulation {
            timeline,
            results,
            averages,
            stats,
            dispatches: self.dispatches,
        })
    }
}

/// Latest instant a work-conserving run over `processes` can reach
///
/// Nothing finishes later than the last arrival plus all the work, so the
/// bound is `max arrival + sum of bursts + 1`. Inputs whose bound does not fit
/// in `Time` are rejected, naming the process that pushed it over.
pub(crate) fn safety_horizon(processes: &[Process]) -> SimResult<Time> {
    let overflow = |p: &Process| SimError::InvalidProcess {
        pid: p.pid,
        reason: "arrival and burst times overflow the simulation clock".to_string(),
    };

    let Some(latest) = processes.iter().max_by_key(|p| p.arrival) else {
        return Ok(1);
    };
    let mut bound = latest.arrival.checked_add(1).ok_or_else(|| overflow(latest))?;
    for p in processes {
        bound = bound.checked_add(p.burst).ok_or_else(|| overflow(p))?;
    }
    Ok(bound)
}

fn result_for(entry: &Entry) -> SimResult<ProcessStats> {
    let missing = |what: &str| SimError::fault(format!("process {} has no {what}", entry.pid));
    let completion = entry.completion.ok_or_else(|| missing("completion time"))?;
    let first_dispatch = entry.first_dispatch.ok_or_else(|| missing("first dispatch"))?;

    let turnaround = completion
        .checked_sub(entry.arrival)
        .ok_or_else(|| missing("non-negative turnaround"))?;
    let waiting = turnaround
        .checked_sub(entry.burst)
        .ok_or_else(|| missing("non-negative waiting time"))?;
    let response = first_dispatch
        .checked_sub(entry.arrival)
        .ok_or_else(|| missing("non-negative response time"))?;

    Ok(ProcessStats {
        pid: entry.pid,
        arrival: entry.arrival,
        burst: entry.burst,
        priority: entry.priority,
        completion,
        turnaround,
        waiting,
        response,
    })
}
