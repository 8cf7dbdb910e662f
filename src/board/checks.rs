use arrayvec::ArrayVec;

use crate::prelude::*;

impl Board
{
    /// Ensures this board could have come out of alternating play.
    ///
    /// X moves first, so X holds as many marks as O or one more. A completed line must belong to the mark that moved
    /// last, since nobody plays on after a win.
    pub fn check(&self) -> Result<()>
    {
        let (x, o) = (self.count(Mark::X), self.count(Mark::O));
        if o > x || x > o + 1
        {
            return Err(Error::unreachable(format!("X moves first, so it needs as many marks as O or one more (X: {}, O: {}).", x, o)));
        }

        match self.winners().as_slice()
        {
            | [] => Ok(()),
            | [Mark::X] if x == o + 1 => Ok(()),
            | [Mark::O] if x == o => Ok(()),
            | [mark] => Err(Error::unreachable(format!("{} holds a completed line, but {} moved after it.", mark, mark.flip()))),
            | _ => Err(Error::unreachable("Both X and O hold a completed line.".into())),
        }
    }

    #[inline]
    /// Ensures the target cell is empty.
    pub(super) fn ensure_empty(&self, mv: Move) -> Result<()>
    {
        if let Some(mark) = self.get(mv).mark()
        {
            return Err(Error::taken(mv, mark));
        }
        Ok(())
    }

    /// Gets every mark that holds at least one completed line.
    pub(super) fn winners(&self) -> ArrayVec<Mark, 2>
    {
        let mut winners = ArrayVec::new();
        for mark in LINES.iter().filter_map(|line| self.completed(line))
        {
            if !winners.contains(&mark)
            {
                winners.push(mark);
            }
        }
        winners
    }
}
