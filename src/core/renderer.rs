/// Generic game renderer trait, keeps drawing code out of the game logic
pub trait GameRenderer<G> {
    /// Draw the whole screen for `game`. Must not mutate anything.
    fn render(&self, game: &G, frame: &mut ratatui::Frame);
}
