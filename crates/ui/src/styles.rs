//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(160deg, #0f172a 0%, #1e293b 100%);
        color: #e2e8f0;
        height: 100%;
        overflow: hidden;
    }

    /* Scrollbar */
    ::-webkit-scrollbar {
        width: 6px;
        height: 6px;
    }
    ::-webkit-scrollbar-track {
        background: transparent;
    }
    ::-webkit-scrollbar-thumb {
        background: rgba(56, 189, 248, 0.35);
        border-radius: 3px;
    }

    /* Main Container */
    .main-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        outline: none;
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 34px;
        background: #020617;
        border-bottom: 1px solid rgba(56, 189, 248, 0.25);
        user-select: none;
        flex-shrink: 0;
    }
    .title-bar-drag {
        flex: 1;
        height: 100%;
        display: flex;
        align-items: center;
        padding-left: 12px;
        cursor: move;
    }
    .title-text {
        font-size: 13px;
        font-weight: 500;
        color: #38bdf8;
    }
    .title-bar-buttons {
        display: flex;
        height: 100%;
    }
    .title-btn {
        width: 44px;
        height: 100%;
        border: none;
        background: transparent;
        color: #94a3b8;
        font-size: 12px;
        cursor: pointer;
    }
    .title-btn:hover {
        background: rgba(148, 163, 184, 0.15);
        color: #e2e8f0;
    }
    .title-btn-close:hover {
        background: #dc2626;
        color: #fff;
    }

    /* Stats Bar */
    .stats-bar {
        display: flex;
        align-items: center;
        gap: 18px;
        padding: 8px 14px;
        background: rgba(2, 6, 23, 0.6);
        border-bottom: 1px solid rgba(56, 189, 248, 0.15);
        flex-shrink: 0;
    }
    .stat-item {
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .stat-item-right {
        margin-left: auto;
    }
    .stat-label {
        font-size: 11px;
        letter-spacing: 1px;
        color: #64748b;
    }
    .stat-bar {
        width: 90px;
        height: 6px;
        background: rgba(148, 163, 184, 0.2);
        border-radius: 3px;
        overflow: hidden;
    }
    .stat-bar-fill {
        height: 100%;
        border-radius: 3px;
        transition: width 0.4s;
    }
    .stat-bar-cpu {
        background: #38bdf8;
    }
    .stat-bar-ram {
        background: #a78bfa;
    }
    .stat-value {
        font-size: 12px;
        font-weight: 600;
    }
    .stat-value-cyan { color: #38bdf8; }
    .stat-value-purple { color: #a78bfa; }
    .stat-value-green { color: #34d399; }
    .stat-value-yellow { color: #facc15; }

    /* Content */
    .content-area {
        flex: 1;
        min-height: 0;
        display: flex;
        flex-direction: column;
    }
    .process-list, .process-detail, .not-found {
        flex: 1;
        min-height: 0;
        display: flex;
        flex-direction: column;
        padding: 14px;
        gap: 12px;
    }

    /* Header Box */
    .header-box {
        padding: 12px 16px;
        background: rgba(15, 23, 42, 0.8);
        border: 1px solid rgba(56, 189, 248, 0.2);
        border-radius: 8px;
        flex-shrink: 0;
    }
    .header-title {
        font-size: 18px;
        color: #38bdf8;
        margin-bottom: 4px;
    }
    .header-stats {
        display: flex;
        gap: 18px;
        font-size: 12px;
        color: #94a3b8;
    }
    .header-hint {
        margin-left: auto;
        color: #64748b;
    }
    .status-message {
        margin-top: 6px;
        font-size: 12px;
        color: #34d399;
    }

    /* Controls */
    .controls {
        display: flex;
        align-items: center;
        gap: 10px;
        flex-shrink: 0;
    }
    .search-input {
        flex: 1;
        padding: 7px 12px;
        background: rgba(15, 23, 42, 0.9);
        border: 1px solid rgba(56, 189, 248, 0.25);
        border-radius: 6px;
        color: #e2e8f0;
        font-size: 13px;
        outline: none;
    }
    .search-input:focus {
        border-color: #38bdf8;
    }
    .checkbox-label {
        display: flex;
        align-items: center;
        gap: 6px;
        font-size: 12px;
        color: #94a3b8;
        cursor: pointer;
    }
    .btn {
        padding: 7px 14px;
        border: none;
        border-radius: 6px;
        font-size: 13px;
        cursor: pointer;
        text-decoration: none;
    }
    .btn-primary {
        background: rgba(56, 189, 248, 0.18);
        color: #38bdf8;
        border: 1px solid rgba(56, 189, 248, 0.4);
    }
    .btn-primary:hover {
        background: rgba(56, 189, 248, 0.3);
    }
    .btn-danger {
        background: rgba(220, 38, 38, 0.18);
        color: #f87171;
        border: 1px solid rgba(220, 38, 38, 0.4);
    }
    .btn-danger:hover {
        background: rgba(220, 38, 38, 0.3);
    }

    /* Process Table */
    .table-container {
        flex: 1;
        min-height: 0;
        overflow-y: auto;
        border: 1px solid rgba(56, 189, 248, 0.2);
        border-radius: 8px;
    }
    .process-table {
        width: 100%;
        border-collapse: collapse;
        font-size: 12px;
    }
    .table-header {
        position: sticky;
        top: 0;
        padding: 8px 12px;
        text-align: left;
        background: #0f172a;
        color: #64748b;
        letter-spacing: 1px;
        font-size: 11px;
        cursor: pointer;
        user-select: none;
    }
    .process-row:hover {
        background: rgba(56, 189, 248, 0.08);
    }
    .cell {
        padding: 6px 12px;
        border-bottom: 1px solid rgba(148, 163, 184, 0.08);
        white-space: nowrap;
    }
    .cell-pid {
        color: #64748b;
        width: 70px;
    }
    .cell-path {
        color: #64748b;
        max-width: 260px;
        overflow: hidden;
        text-overflow: ellipsis;
    }
    .process-link {
        color: #38bdf8;
        text-decoration: none;
    }
    .process-link:hover {
        text-decoration: underline;
    }
    .cpu-high { color: #f87171; }
    .cpu-medium { color: #facc15; }
    .cpu-low { color: #94a3b8; }
    .memory-bar-container {
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .memory-bar-bg {
        width: 70px;
        height: 5px;
        background: rgba(148, 163, 184, 0.2);
        border-radius: 3px;
        overflow: hidden;
    }
    .memory-bar-fill {
        height: 100%;
        background: #a78bfa;
        border-radius: 3px;
    }
    .memory-text {
        color: #a78bfa;
    }

    /* Detail View */
    .detail-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 10px;
        flex-shrink: 0;
    }
    .detail-item {
        display: flex;
        flex-direction: column;
        gap: 4px;
        padding: 10px 14px;
        background: rgba(15, 23, 42, 0.8);
        border: 1px solid rgba(56, 189, 248, 0.15);
        border-radius: 8px;
    }
    .detail-item-wide {
        grid-column: span 4;
    }
    .detail-label {
        font-size: 11px;
        letter-spacing: 1px;
        color: #64748b;
    }
    .detail-value {
        font-size: 14px;
        color: #e2e8f0;
    }
    .detail-value-path {
        font-size: 12px;
        color: #94a3b8;
        word-break: break-all;
        white-space: normal;
    }

    /* Not Found */
    .not-found {
        align-items: center;
        justify-content: center;
    }
    .not-found-path {
        color: #94a3b8;
        font-size: 13px;
    }
"#;
