//! Unit tests for core scheduler modules
//!
//! These tests run on the host (not embedded target) to verify
//! the core algorithms work correctly.

#[cfg(test)]
mod table_tests {
    use coopsched::error::SchError;
    use coopsched::sched::TaskTable;
    use coopsched::types::TaskHandle;

    fn noop() {}

    #[test]
    fn test_empty_table() {
        let table: TaskTable<4> = TaskTable::new();
        assert!(table.is_empty());
        assert!(!table.is_full());
        assert_eq!(table.len(), 0);
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_insert_takes_first_free_slot() {
        let mut table: TaskTable<4> = TaskTable::new();

        let a = table.insert(noop, 0, 1).unwrap();
        let b = table.insert(noop, 0, 2).unwrap();
        let c = table.insert(noop, 0, 3).unwrap();
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));

        // Freed index is reused before the tail
        table.remove(b).unwrap();
        let d = table.insert(noop, 7, 0).unwrap();
        assert_eq!(d.index(), 1);
        assert_eq!(table.get(d).unwrap().delay(), 7);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_insert_into_full_table() {
        let mut table: TaskTable<2> = TaskTable::new();
        table.insert(noop, 1, 1).unwrap();
        table.insert(noop, 2, 2).unwrap();
        assert!(table.is_full());

        assert_eq!(table.insert(noop, 3, 3), Err(SchError::TableFull));

        let delays: Vec<u16> = table.iter().map(|(_, entry)| entry.delay()).collect();
        assert_eq!(delays, vec![1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut table: TaskTable<3> = TaskTable::new();
        let a = table.insert(noop, 0, 5).unwrap();

        assert_eq!(table.remove(a), Ok(()));
        assert!(table.get(a).is_none());

        // Removing a free slot is tolerated
        assert_eq!(table.remove(a), Ok(()));
        assert_eq!(table.remove(TaskHandle::from_index(2)), Ok(()));

        // Out of range is reported
        assert_eq!(table.remove(TaskHandle::from_index(3)), Err(SchError::InvalidHandle));
        assert_eq!(table.remove(TaskHandle::from_index(usize::MAX)), Err(SchError::InvalidHandle));
    }

    #[test]
    fn test_advance_periodic_reload() {
        let mut table: TaskTable<1> = TaskTable::new();
        let h = table.insert(noop, 0, 3).unwrap();

        table.advance();
        let entry = table.get(h).unwrap();
        assert_eq!(entry.pending_runs(), 1);
        assert_eq!(entry.delay(), 2);

        table.advance();
        table.advance();
        assert_eq!(table.get(h).unwrap().delay(), 0);
        assert_eq!(table.get(h).unwrap().pending_runs(), 1);

        table.advance();
        assert_eq!(table.get(h).unwrap().pending_runs(), 2);
        assert_eq!(table.get(h).unwrap().delay(), 2);
    }

    #[test]
    fn test_advance_one_shot_stays_due() {
        let mut table: TaskTable<1> = TaskTable::new();
        let h = table.insert(noop, 1, 0).unwrap();

        table.advance();
        assert_eq!(table.get(h).unwrap().delay(), 0);
        assert!(!table.get(h).unwrap().is_due());

        table.advance();
        table.advance();
        let entry = table.get(h).unwrap();
        assert_eq!(entry.delay(), 0);
        assert_eq!(entry.pending_runs(), 2);
    }

    #[test]
    fn test_pending_runs_saturate() {
        let mut table: TaskTable<1> = TaskTable::new();
        let h = table.insert(noop, 0, 1).unwrap();

        for _ in 0..300 {
            table.advance();
        }
        assert_eq!(table.get(h).unwrap().pending_runs(), u8::MAX);
    }

    #[test]
    fn test_claim_periodic() {
        let mut table: TaskTable<2> = TaskTable::new();
        let h = table.insert(noop, 0, 2).unwrap();

        assert!(table.claim(0).is_none());

        table.advance();
        assert!(table.claim(0).is_some());
        assert_eq!(table.get(h).unwrap().pending_runs(), 0);
        assert!(table.claim(0).is_none());

        // Empty and out-of-range slots have nothing to claim
        assert!(table.claim(1).is_none());
        assert!(table.claim(5).is_none());
    }

    #[test]
    fn test_claim_one_shot_frees_slot() {
        let mut table: TaskTable<2> = TaskTable::new();
        let h = table.insert(noop, 0, 0).unwrap();

        table.advance();
        table.advance();
        assert_eq!(table.get(h).unwrap().pending_runs(), 2);

        assert!(table.claim(h.index()).is_some());
        assert!(table.get(h).is_none());
        assert!(table.claim(h.index()).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut table: TaskTable<3> = TaskTable::new();
        table.insert(noop, 0, 1).unwrap();
        table.insert(noop, 0, 0).unwrap();
        table.advance();

        table.clear();
        assert!(table.is_empty());
        assert!(table.claim(0).is_none());
    }
}

#[cfg(test)]
mod slot_tests {
    use coopsched::task::{TaskEntry, TaskSlot};

    fn noop() {}

    #[test]
    fn test_new_entry() {
        let entry = TaskEntry::new(noop, 300, 1000);
        assert_eq!(entry.delay(), 300);
        assert_eq!(entry.period(), 1000);
        assert_eq!(entry.pending_runs(), 0);
        assert!(!entry.is_one_shot());
        assert!(!entry.is_due());

        assert!(TaskEntry::new(noop, 5, 0).is_one_shot());
    }

    #[test]
    fn test_slot_variants() {
        let empty = TaskSlot::default();
        assert!(empty.is_empty());
        assert!(empty.entry().is_none());

        let slot = TaskSlot::Occupied(TaskEntry::new(noop, 1, 2));
        assert!(!slot.is_empty());
        assert_eq!(slot.entry().map(TaskEntry::period), Some(2));
    }
}

#[cfg(test)]
mod time_tests {
    use coopsched::error::SchError;
    use coopsched::time::ms_to_ticks;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(ms_to_ticks(100, 10), Ok(10));
        assert_eq!(ms_to_ticks(0, 10), Ok(0));
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(ms_to_ticks(101, 10), Ok(11));
        assert_eq!(ms_to_ticks(1, 20), Ok(1));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(ms_to_ticks(100, 0), Err(SchError::TickIntervalInvalid));
        assert_eq!(ms_to_ticks(65_536, 1), Err(SchError::TickOverflow));
        assert_eq!(ms_to_ticks(65_535, 1), Ok(65_535));
    }
}

#[cfg(test)]
mod error_tests {
    use coopsched::error::SchError;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchError::TableFull.code(), 1001);
        assert_eq!(SchError::InvalidHandle.code(), 1002);
        assert_eq!(SchError::NotInitialized.code(), 2001);
        assert_eq!(SchError::CalledFromIsr.code(), 4001);
        assert_ne!(SchError::TableFull, SchError::InvalidHandle);
    }

    #[test]
    fn test_error_debug() {
        // Ensure errors can be formatted for debugging
        let err = SchError::TickOverflow;
        assert_eq!(format!("{:?}", err), "TickOverflow");
    }
}

#[cfg(test)]
mod config_tests {
    use coopsched::config::*;

    #[test]
    fn test_config_values() {
        assert_eq!(CFG_MAX_TASKS, 10);
        assert!(CFG_MAX_TASKS <= u8::MAX as usize, "Too many task slots");

        assert!(CFG_TICK_INTERVAL_MIN_MS >= 1);
        assert!((CFG_TICK_INTERVAL_MIN_MS..=CFG_TICK_INTERVAL_MAX_MS).contains(&CFG_TICK_INTERVAL_MS));

        // Longest interval must still fit the reload register
        let cnts = u32::from(CFG_TICK_INTERVAL_MAX_MS) * CFG_TICK_CNTS_PER_MS;
        assert!(cnts - 1 <= CFG_TICK_RELOAD_MAX);
        let cnts = u32::from(CFG_TICK_INTERVAL_MAX_MS + 1) * CFG_TICK_CNTS_PER_MS;
        assert!(cnts - 1 > CFG_TICK_RELOAD_MAX);
    }
}
