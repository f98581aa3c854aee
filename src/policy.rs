pub trait Policy<S, A> {
    // select an action for the given state; &mut so stochastic policies can
    // own their RNG
    fn select_action(&mut self, state: &S) -> A;
}
