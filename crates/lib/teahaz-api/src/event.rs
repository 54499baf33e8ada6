/// Events a chatroom session can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Error,
    MsgNew,
    MsgDel,
    MsgSys,
    MsgSent,
    UserJoin,
    UserLeave,
    ServerInfo,
    MsgSysSilent,
    NetworkException,
}
