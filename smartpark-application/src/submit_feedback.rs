use super::*;

pub fn submit_feedback(
    connections: &sqlite::Connections,
    actor: Id,
    feedback: usecases::NewFeedback,
) -> Result<Feedback> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_feedback(conn, actor, feedback).map_err(|err| {
            log::warn!("Failed to submit feedback: {}", err);
            err
        })
    })?)
}
