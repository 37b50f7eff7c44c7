// Generated by kbitfield from structures.bf. Do not edit.

/// `mdb_node`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct MdbNode([usize; 2]);
#[allow(dead_code)]
impl MdbNode {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2])
    }
    #[inline(always)]
    pub const fn from_words(words: [usize; 2]) -> Self {
        Self(words)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `mdb_next`.
    #[inline(always)]
    #[must_use]
    pub const fn get_mdb_next(&self) -> usize {
        (self.0[1] & 0xFFFFFFFFFFFC) >> 0
    }
    /// Returns a copy with `mdb_next` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_mdb_next(self, value: usize) -> Self {
        let mut words = self.0;
        words[1] = (words[1] & !0xFFFFFFFFFFFC) | ((value << 0) & 0xFFFFFFFFFFFC);
        Self(words)
    }
    /// Overwrites `mdb_next`.
    #[inline(always)]
    pub fn set_mdb_next(&mut self, value: usize) {
        *self = self.with_mdb_next(value);
    }
    /// Reads `mdb_revocable`.
    #[inline(always)]
    #[must_use]
    pub const fn get_mdb_revocable(&self) -> bool {
        ((self.0[1] & 0x2) >> 1) == 1
    }
    /// Returns a copy with `mdb_revocable` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_mdb_revocable(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[1] = (words[1] & !0x2) | ((value << 1) & 0x2);
        Self(words)
    }
    /// Overwrites `mdb_revocable`.
    #[inline(always)]
    pub fn set_mdb_revocable(&mut self, value: bool) {
        *self = self.with_mdb_revocable(value);
    }
    /// Reads `mdb_first_badged`.
    #[inline(always)]
    #[must_use]
    pub const fn get_mdb_first_badged(&self) -> bool {
        ((self.0[1] & 0x1) >> 0) == 1
    }
    /// Returns a copy with `mdb_first_badged` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_mdb_first_badged(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[1] = (words[1] & !0x1) | ((value << 0) & 0x1);
        Self(words)
    }
    /// Overwrites `mdb_first_badged`.
    #[inline(always)]
    pub fn set_mdb_first_badged(&mut self, value: bool) {
        *self = self.with_mdb_first_badged(value);
    }
    /// Reads `mdb_prev`.
    #[inline(always)]
    #[must_use]
    pub const fn get_mdb_prev(&self) -> usize {
        (self.0[0] & 0xFFFFFFFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `mdb_prev` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_mdb_prev(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xFFFFFFFFFFFFFFFF) | ((value << 0) & 0xFFFFFFFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `mdb_prev`.
    #[inline(always)]
    pub fn set_mdb_prev(&mut self, value: usize) {
        *self = self.with_mdb_prev(value);
    }
}
/// `null_cap`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct NullCap([usize; 2]);
#[allow(dead_code)]
impl NullCap {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2]).with_type(CapType::NullCap as usize)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `type`, the [`CapType`] discriminant.
    #[inline(always)]
    #[must_use]
    pub const fn get_type(&self) -> usize {
        (self.0[0] & 0xF800000000000000) >> 59
    }
    /// Returns a copy with `type` replaced.
    #[inline(always)]
    #[must_use]
    const fn with_type(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xF800000000000000) | ((value << 59) & 0xF800000000000000);
        Self(words)
    }
    /// Overwrites `type`.
    #[inline(always)]
    fn set_type(&mut self, value: usize) {
        *self = self.with_type(value);
    }
}
/// `untyped_cap`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct UntypedCap([usize; 2]);
#[allow(dead_code)]
impl UntypedCap {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2]).with_type(CapType::UntypedCap as usize)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `free_index`.
    #[inline(always)]
    #[must_use]
    pub const fn get_free_index(&self) -> usize {
        (self.0[1] & 0xFFFFFFFFFFFF0000) >> 16
    }
    /// Returns a copy with `free_index` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_free_index(self, value: usize) -> Self {
        let mut words = self.0;
        words[1] = (words[1] & !0xFFFFFFFFFFFF0000) | ((value << 16) & 0xFFFFFFFFFFFF0000);
        Self(words)
    }
    /// Overwrites `free_index`.
    #[inline(always)]
    pub fn set_free_index(&mut self, value: usize) {
        *self = self.with_free_index(value);
    }
    /// Reads `is_device`.
    #[inline(always)]
    #[must_use]
    pub const fn get_is_device(&self) -> bool {
        ((self.0[1] & 0x40) >> 6) == 1
    }
    /// Returns a copy with `is_device` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_is_device(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[1] = (words[1] & !0x40) | ((value << 6) & 0x40);
        Self(words)
    }
    /// Overwrites `is_device`.
    #[inline(always)]
    pub fn set_is_device(&mut self, value: bool) {
        *self = self.with_is_device(value);
    }
    /// Reads `block_size`.
    #[inline(always)]
    #[must_use]
    pub const fn get_block_size(&self) -> usize {
        (self.0[1] & 0x3F) >> 0
    }
    /// Returns a copy with `block_size` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_block_size(self, value: usize) -> Self {
        let mut words = self.0;
        words[1] = (words[1] & !0x3F) | ((value << 0) & 0x3F);
        Self(words)
    }
    /// Overwrites `block_size`.
    #[inline(always)]
    pub fn set_block_size(&mut self, value: usize) {
        *self = self.with_block_size(value);
    }
    /// Reads `type`, the [`CapType`] discriminant.
    #[inline(always)]
    #[must_use]
    pub const fn get_type(&self) -> usize {
        (self.0[0] & 0xF800000000000000) >> 59
    }
    /// Returns a copy with `type` replaced.
    #[inline(always)]
    #[must_use]
    const fn with_type(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xF800000000000000) | ((value << 59) & 0xF800000000000000);
        Self(words)
    }
    /// Overwrites `type`.
    #[inline(always)]
    fn set_type(&mut self, value: usize) {
        *self = self.with_type(value);
    }
    /// Reads `ptr`.
    #[inline(always)]
    #[must_use]
    pub const fn get_ptr(&self) -> usize {
        (self.0[0] & 0xFFFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `ptr` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_ptr(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xFFFFFFFFFFFF) | ((value << 0) & 0xFFFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `ptr`.
    #[inline(always)]
    pub fn set_ptr(&mut self, value: usize) {
        *self = self.with_ptr(value);
    }
}
/// `endpoint_cap`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct EndpointCap([usize; 2]);
#[allow(dead_code)]
impl EndpointCap {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2]).with_type(CapType::EndpointCap as usize)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `ep_badge`.
    #[inline(always)]
    #[must_use]
    pub const fn get_ep_badge(&self) -> usize {
        (self.0[1] & 0xFFFFFFFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `ep_badge` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_ep_badge(self, value: usize) -> Self {
        let mut words = self.0;
        words[1] = (words[1] & !0xFFFFFFFFFFFFFFFF) | ((value << 0) & 0xFFFFFFFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `ep_badge`.
    #[inline(always)]
    pub fn set_ep_badge(&mut self, value: usize) {
        *self = self.with_ep_badge(value);
    }
    /// Reads `type`, the [`CapType`] discriminant.
    #[inline(always)]
    #[must_use]
    pub const fn get_type(&self) -> usize {
        (self.0[0] & 0xF800000000000000) >> 59
    }
    /// Returns a copy with `type` replaced.
    #[inline(always)]
    #[must_use]
    const fn with_type(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xF800000000000000) | ((value << 59) & 0xF800000000000000);
        Self(words)
    }
    /// Overwrites `type`.
    #[inline(always)]
    fn set_type(&mut self, value: usize) {
        *self = self.with_type(value);
    }
    /// Reads `can_grant_reply`.
    #[inline(always)]
    #[must_use]
    pub const fn get_can_grant_reply(&self) -> bool {
        ((self.0[0] & 0x400000000000000) >> 58) == 1
    }
    /// Returns a copy with `can_grant_reply` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_can_grant_reply(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[0] = (words[0] & !0x400000000000000) | ((value << 58) & 0x400000000000000);
        Self(words)
    }
    /// Overwrites `can_grant_reply`.
    #[inline(always)]
    pub fn set_can_grant_reply(&mut self, value: bool) {
        *self = self.with_can_grant_reply(value);
    }
    /// Reads `can_grant`.
    #[inline(always)]
    #[must_use]
    pub const fn get_can_grant(&self) -> bool {
        ((self.0[0] & 0x200000000000000) >> 57) == 1
    }
    /// Returns a copy with `can_grant` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_can_grant(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[0] = (words[0] & !0x200000000000000) | ((value << 57) & 0x200000000000000);
        Self(words)
    }
    /// Overwrites `can_grant`.
    #[inline(always)]
    pub fn set_can_grant(&mut self, value: bool) {
        *self = self.with_can_grant(value);
    }
    /// Reads `can_receive`.
    #[inline(always)]
    #[must_use]
    pub const fn get_can_receive(&self) -> bool {
        ((self.0[0] & 0x100000000000000) >> 56) == 1
    }
    /// Returns a copy with `can_receive` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_can_receive(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[0] = (words[0] & !0x100000000000000) | ((value << 56) & 0x100000000000000);
        Self(words)
    }
    /// Overwrites `can_receive`.
    #[inline(always)]
    pub fn set_can_receive(&mut self, value: bool) {
        *self = self.with_can_receive(value);
    }
    /// Reads `can_send`.
    #[inline(always)]
    #[must_use]
    pub const fn get_can_send(&self) -> bool {
        ((self.0[0] & 0x80000000000000) >> 55) == 1
    }
    /// Returns a copy with `can_send` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_can_send(self, value: bool) -> Self {
        let value = value as usize;
        let mut words = self.0;
        words[0] = (words[0] & !0x80000000000000) | ((value << 55) & 0x80000000000000);
        Self(words)
    }
    /// Overwrites `can_send`.
    #[inline(always)]
    pub fn set_can_send(&mut self, value: bool) {
        *self = self.with_can_send(value);
    }
    /// Reads `ep_ptr`.
    #[inline(always)]
    #[must_use]
    pub const fn get_ep_ptr(&self) -> usize {
        (self.0[0] & 0xFFFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `ep_ptr` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_ep_ptr(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xFFFFFFFFFFFF) | ((value << 0) & 0xFFFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `ep_ptr`.
    #[inline(always)]
    pub fn set_ep_ptr(&mut self, value: usize) {
        *self = self.with_ep_ptr(value);
    }
}
/// `cnode_cap`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CNodeCap([usize; 2]);
#[allow(dead_code)]
impl CNodeCap {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2]).with_type(CapType::CNodeCap as usize)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `cnode_guard`.
    #[inline(always)]
    #[must_use]
    pub const fn get_cnode_guard(&self) -> usize {
        (self.0[1] & 0xFFFFFFFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `cnode_guard` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_cnode_guard(self, value: usize) -> Self {
        let mut words = self.0;
        words[1] = (words[1] & !0xFFFFFFFFFFFFFFFF) | ((value << 0) & 0xFFFFFFFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `cnode_guard`.
    #[inline(always)]
    pub fn set_cnode_guard(&mut self, value: usize) {
        *self = self.with_cnode_guard(value);
    }
    /// Reads `type`, the [`CapType`] discriminant.
    #[inline(always)]
    #[must_use]
    pub const fn get_type(&self) -> usize {
        (self.0[0] & 0xF800000000000000) >> 59
    }
    /// Returns a copy with `type` replaced.
    #[inline(always)]
    #[must_use]
    const fn with_type(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xF800000000000000) | ((value << 59) & 0xF800000000000000);
        Self(words)
    }
    /// Overwrites `type`.
    #[inline(always)]
    fn set_type(&mut self, value: usize) {
        *self = self.with_type(value);
    }
    /// Reads `cnode_guard_size`.
    #[inline(always)]
    #[must_use]
    pub const fn get_cnode_guard_size(&self) -> usize {
        (self.0[0] & 0x7E0000000000000) >> 53
    }
    /// Returns a copy with `cnode_guard_size` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_cnode_guard_size(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0x7E0000000000000) | ((value << 53) & 0x7E0000000000000);
        Self(words)
    }
    /// Overwrites `cnode_guard_size`.
    #[inline(always)]
    pub fn set_cnode_guard_size(&mut self, value: usize) {
        *self = self.with_cnode_guard_size(value);
    }
    /// Reads `cnode_radix`.
    #[inline(always)]
    #[must_use]
    pub const fn get_cnode_radix(&self) -> usize {
        (self.0[0] & 0x1F800000000000) >> 47
    }
    /// Returns a copy with `cnode_radix` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_cnode_radix(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0x1F800000000000) | ((value << 47) & 0x1F800000000000);
        Self(words)
    }
    /// Overwrites `cnode_radix`.
    #[inline(always)]
    pub fn set_cnode_radix(&mut self, value: usize) {
        *self = self.with_cnode_radix(value);
    }
    /// Reads `cnode_ptr`.
    #[inline(always)]
    #[must_use]
    pub const fn get_cnode_ptr(&self) -> usize {
        (self.0[0] & 0x7FFFFFFFFFFF) >> 0
    }
    /// Returns a copy with `cnode_ptr` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_cnode_ptr(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0x7FFFFFFFFFFF) | ((value << 0) & 0x7FFFFFFFFFFF);
        Self(words)
    }
    /// Overwrites `cnode_ptr`.
    #[inline(always)]
    pub fn set_cnode_ptr(&mut self, value: usize) {
        *self = self.with_cnode_ptr(value);
    }
}
/// Discriminant values stored in `capType`.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapType {
    NullCap = 0,
    UntypedCap = 2,
    EndpointCap = 4,
    NotificationCap = 6,
    ReplyCap = 8,
    CNodeCap = 10,
    ThreadCap = 12,
}
/// `null_fault`: 2 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct NullFault([usize; 2]);
#[allow(dead_code)]
impl NullFault {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([0; 2])
    }
    #[inline(always)]
    pub const fn from_words(words: [usize; 2]) -> Self {
        Self(words)
    }
    #[inline(always)]
    pub const fn words(&self) -> &[usize; 2] {
        &self.0
    }
    /// Reads `fault_type`, the [`Fault`] discriminant.
    #[inline(always)]
    #[must_use]
    pub const fn get_fault_type(&self) -> usize {
        (self.0[0] & 0xF) >> 0
    }
    /// Returns a copy with `fault_type` replaced.
    #[inline(always)]
    #[must_use]
    pub const fn with_fault_type(self, value: usize) -> Self {
        let mut words = self.0;
        words[0] = (words[0] & !0xF) | ((value << 0) & 0xF);
        Self(words)
    }
    /// Overwrites `fault_type`.
    #[inline(always)]
    pub fn set_fault_type(&mut self, value: usize) {
        *self = self.with_fault_type(value);
    }
}
/// Discriminant values stored in `faultType`.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    NullFault = 0,
    CapFault = 1,
    UnknownSyscall = 2,
    UserException = 3,
}
